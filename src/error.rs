//! Error types for URL relation checks.

use std::fmt;

use thiserror::Error;

/// Position of a URL within a compared pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    /// The first URL (`url1`).
    First,
    /// The second URL (`url2`).
    Second,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::First => f.write_str("first"),
            Argument::Second => f.write_str("second"),
        }
    }
}

/// Errors raised when a caller violates the comparison contract.
///
/// Expected variation between URLs (unknown TLDs, missing query pair access)
/// never produces an error; it only makes the affected components mismatch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelationError {
    /// One of the URLs does not expose the minimal URL accessors.
    #[error("Invalid URL: the {0} argument does not expose the required URL components")]
    InvalidInput(Argument),

    /// A target component is missing or is not part of the component sequence.
    #[error("Invalid URL component: {0}")]
    InvalidComponent(String),
}
