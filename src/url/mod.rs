//! URL-facing collaborators of the relation engine.
//!
//! This module contains:
//! - The URL input contract and its `url::Url` adapter
//! - Public Suffix List (PSL) hostname splitting
//! - Literal and regex matchers for filenames and query names

pub mod pattern;
pub mod psl;
pub mod view;

// Re-export main functionality
pub use pattern::{any_match, Pattern};
pub use psl::{HostLabels, PublicSuffixList, SuffixResolver};
pub use view::{UrlLike, UrlRecord, UrlView};
