//! Core relation engine.
//!
//! This module contains the comparison pipeline:
//! - Scope resolution over the component sequence
//! - Option resolution against the built-in profiles
//! - Per-component relation evaluation
//! - The `UrlRelation` entry point

pub mod exclude;
pub mod facade;
pub mod options;
pub mod relation;

// Re-export main functionality
pub use exclude::resolve_scope;
pub use facade::UrlRelation;
pub use options::{
    is_http_pair, is_same_scheme_family, resolve, resolve_option, OptionValue, Options, PairFn,
    CAREFUL_PROFILE, COMMON_PROFILE,
};
pub use relation::{evaluate, RelationMap};
