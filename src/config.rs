//! Options loaded from TOML.
//!
//! ```toml
//! profile = "careful"
//! ignore_www = true
//! target_component = "path"
//! components = ["port"]
//! index_filenames = ["index.html", { regex = "^default\\.[a-z]+$" }]
//!
//! [default_ports]
//! "http:" = 80
//! "https:" = 443
//! ```
//!
//! Keys left out stay unset, so they fall back to the named `profile` (when
//! given) and then to the common profile.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use crate::core::options::{Options, OptionValue, CAREFUL_PROFILE, COMMON_PROFILE};
use crate::error::RelationError;
use crate::types::Component;
use crate::url::pattern::Pattern;

/// Errors raised while loading options.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid options file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    #[error(transparent)]
    Component(#[from] RelationError),
}

/// A filename or query-name entry: a literal string or `{ regex = "..." }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PatternConfig {
    Literal(String),
    Regex { regex: String },
}

impl PatternConfig {
    fn compile(&self) -> Result<Pattern, ConfigError> {
        match self {
            PatternConfig::Literal(literal) => Ok(Pattern::from(literal.as_str())),
            PatternConfig::Regex { regex } => {
                Pattern::regex(regex).map_err(|source| ConfigError::Pattern {
                    pattern: regex.clone(),
                    source,
                })
            }
        }
    }
}

/// Serialized form of [`Options`]. Only constant values can be expressed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionsConfig {
    /// Base profile for unset keys: `"careful"` or `"common"`.
    pub profile: Option<String>,
    pub default_ports: Option<HashMap<String, u16>>,
    pub index_filenames: Option<Vec<PatternConfig>>,
    pub query_names: Option<Vec<PatternConfig>>,
    pub ignore_default_port: Option<bool>,
    pub ignore_index_filename: Option<bool>,
    pub ignore_empty_segment_names: Option<bool>,
    pub ignore_empty_queries: Option<bool>,
    pub ignore_query_names: Option<bool>,
    pub ignore_query_order: Option<bool>,
    pub ignore_www: Option<bool>,
    pub components: Option<Vec<String>>,
    pub ignore_components: Option<bool>,
    pub target_component: Option<String>,
}

impl OptionsConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Build [`Options`], validating patterns and component names.
    pub fn into_options(self) -> Result<Options, ConfigError> {
        let base = match self.profile.as_deref() {
            None => None,
            Some("careful") => Some(&*CAREFUL_PROFILE),
            Some("common") => Some(&*COMMON_PROFILE),
            Some(other) => return Err(ConfigError::UnknownProfile(other.to_string())),
        };

        let patterns = |entries: Option<Vec<PatternConfig>>| -> Result<_, ConfigError> {
            entries
                .map(|entries| entries.iter().map(PatternConfig::compile).collect::<Result<Vec<_>, _>>())
                .transpose()
                .map(|patterns| patterns.map(OptionValue::Literal))
        };

        let components = self
            .components
            .map(|names| {
                names
                    .iter()
                    .map(|name| name.parse::<Component>())
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let target_component = self
            .target_component
            .map(|name| name.parse::<Component>())
            .transpose()?;

        let options = Options {
            default_ports: self.default_ports.map(OptionValue::Literal),
            index_filenames: patterns(self.index_filenames)?,
            query_names: patterns(self.query_names)?,
            ignore_default_port: self.ignore_default_port.map(OptionValue::Literal),
            ignore_index_filename: self.ignore_index_filename.map(OptionValue::Literal),
            ignore_empty_segment_names: self.ignore_empty_segment_names.map(OptionValue::Literal),
            ignore_empty_queries: self.ignore_empty_queries.map(OptionValue::Literal),
            ignore_query_names: self.ignore_query_names.map(OptionValue::Literal),
            ignore_query_order: self.ignore_query_order.map(OptionValue::Literal),
            ignore_www: self.ignore_www.map(OptionValue::Literal),
            components: components.map(OptionValue::Literal),
            ignore_components: self.ignore_components.map(OptionValue::Literal),
            target_component: target_component.map(OptionValue::Literal),
        };

        Ok(match base {
            Some(base) => options.or(base),
            None => options,
        })
    }
}

/// Parse TOML straight into [`Options`].
pub fn options_from_toml(s: &str) -> Result<Options, ConfigError> {
    OptionsConfig::from_toml_str(s)?.into_options()
}
