//! Literal-or-regex matchers for index filenames and query names.

use regex::Regex;

/// A filename or query-name matcher.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Matches the exact string.
    Literal(String),
    /// Matches anything the expression finds a match in.
    Regex(Regex),
}

impl Pattern {
    /// Compile a regular expression pattern.
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Pattern::Regex(Regex::new(pattern)?))
    }

    pub fn is_match(&self, value: &str) -> bool {
        match self {
            Pattern::Literal(literal) => literal == value,
            Pattern::Regex(regex) => regex.is_match(value),
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Pattern::Literal(a), Pattern::Literal(b)) => a == b,
            (Pattern::Regex(a), Pattern::Regex(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl From<&str> for Pattern {
    fn from(literal: &str) -> Self {
        Pattern::Literal(literal.to_string())
    }
}

impl From<String> for Pattern {
    fn from(literal: String) -> Self {
        Pattern::Literal(literal)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Pattern::Regex(regex)
    }
}

/// Whether `value` matches at least one of `patterns`.
pub fn any_match(value: &str, patterns: &[Pattern]) -> bool {
    patterns.iter().any(|pattern| pattern.is_match(value))
}
