//! url-relation - structural comparison of URL pairs
//!
//! This crate decides how closely two URLs are related, component by
//! component, under a configurable and scheme-aware equivalence policy.
//! `http://www.example.com/` and `http://example.com/` can be treated as the
//! same page while `http://example.com/a` and `http://example.com/b` are not.
//!
//! URLs are never modified; they are only compared.
//!
//! # Quick Start
//!
//! ```
//! use url::Url;
//! use url_relation::{Component, Options, UrlRelation, CAREFUL_PROFILE};
//!
//! let url1 = Url::parse("https://www.example.com/docs/?b=2&a=1")?;
//! let url2 = Url::parse("https://example.com/docs/index.html?a=1&b=2")?;
//!
//! // Default options normalize `www.`, index files and query order for http(s)
//! assert!(UrlRelation::matches(&url1, &url2, None)?);
//!
//! // The careful profile compares byte for byte
//! assert!(!UrlRelation::matches(&url1, &url2, Some(&*CAREFUL_PROFILE))?);
//!
//! // Scoped queries reuse one evaluation
//! let relation = UrlRelation::new(&url1, &url2, Some(&*CAREFUL_PROFILE))?;
//! assert!(relation.up_to(Some(Component::Domain), &[])?);
//! assert!(!relation.up_to(Some(Component::Hostname), &[])?);
//! assert!(relation.up_to(Some(Component::Segments), &[Component::Subdomain])?);
//!
//! // Any option can be overridden, including with a predicate
//! let options = Options {
//!     ignore_query_order: Some(false.into()),
//!     ..Options::new()
//! };
//! assert!(!UrlRelation::matches(&url1, &url2, Some(&options))?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Components
//!
//! Sixteen components are compared, in this order:
//!
//! | Component   | Kind      | Members                       |
//! |-------------|-----------|-------------------------------|
//! | `protocol`  | leaf      |                               |
//! | `username`  | leaf      |                               |
//! | `password`  | leaf      |                               |
//! | `auth`      | composite | username, password            |
//! | `tld`       | leaf      |                               |
//! | `domain`    | leaf      |                               |
//! | `subdomain` | leaf      |                               |
//! | `hostname`  | composite | tld, domain, subdomain        |
//! | `port`      | leaf      |                               |
//! | `host`      | composite | hostname, port                |
//! | `segments`  | leaf      |                               |
//! | `filename`  | leaf      |                               |
//! | `pathname`  | composite | segments, filename            |
//! | `search`    | leaf      |                               |
//! | `path`      | composite | pathname, search              |
//! | `hash`      | leaf      |                               |
//!
//! "Up to X" checks every component from `protocol` through `X`. Excluding a
//! component also excludes every composite built from it.
//!
//! # Error Handling
//!
//! Only contract violations are errors:
//!
//! - [`RelationError::InvalidInput`]: a URL value lacks a required accessor
//! - [`RelationError::InvalidComponent`]: no target component was given
//!
//! Unknown top-level domains, missing query pair access and similar
//! differences only make the affected components mismatch.

// Re-export the relation engine
pub use crate::core::{resolve_scope, UrlRelation};
pub use crate::core::{evaluate, RelationMap};
pub use crate::core::{
    is_http_pair, is_same_scheme_family, resolve, resolve_option, OptionValue, Options, PairFn,
    CAREFUL_PROFILE, COMMON_PROFILE,
};

// Re-export URL collaborators
pub use crate::url::{any_match, Pattern};
pub use crate::url::{HostLabels, PublicSuffixList, SuffixResolver};
pub use crate::url::{UrlLike, UrlRecord, UrlView};

// Re-export public types
pub use config::{options_from_toml, ConfigError, OptionsConfig, PatternConfig};
pub use error::{Argument, RelationError};
pub use types::Component;

// Module declarations
pub mod config;
pub mod core;
pub mod error;
pub mod types;
pub mod url;
