//! Unpacker configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::schema::SchemaGeneration;

/// Environment variable naming the schema generation (`"22"`, `"f1_23"`, ...).
pub const ENV_SCHEMA_GENERATION: &str = "F1_UDP_SCHEMA_GENERATION";

/// Settings for constructing an [`Unpacker`](crate::Unpacker).
///
/// The generation deserializes through the same parser as
/// [`SchemaGeneration::from_str`](std::str::FromStr), so an unsupported
/// value fails while the configuration is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnpackerConfig {
    pub schema_generation: SchemaGeneration,
}

impl UnpackerConfig {
    pub fn new(schema_generation: SchemaGeneration) -> Self {
        Self { schema_generation }
    }

    /// Read overrides from the process environment.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidSchemaGeneration`] when
    /// `F1_UDP_SCHEMA_GENERATION` is set to an unsupported value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`UnpackerConfig::from_env`], reading variables through `lookup`.
    /// Unset or blank variables keep the default.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidSchemaGeneration`] for an unsupported value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_SCHEMA_GENERATION).filter(|v| !v.trim().is_empty()) {
            config.schema_generation = value.parse()?;
        }
        Ok(config)
    }

    /// Parse a JSON document such as `{"schema_generation": "f1_23"}`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON or unknown keys,
    /// [`ConfigError::InvalidSchemaGeneration`] for an unsupported generation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawUnpackerConfig = serde_json::from_str(json)?;
        let mut config = Self::default();
        if let Some(value) = raw.schema_generation {
            config.schema_generation = value.parse()?;
        }
        Ok(config)
    }
}

/// On-disk form of [`UnpackerConfig`] with the generation left unparsed.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawUnpackerConfig {
    schema_generation: Option<String>,
}
