//! Per-instance behaviour switches for models.

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid model config: {0}")]
    Toml(#[from] toml::de::Error),
}

///
/// ModelConfig
///
/// strict_paths       → dotted paths through non-models and unknown tails
///                      become errors instead of being dropped or ignored.
/// refresh_timestamps → reading a timestamp property stamps it with the
///                      current time first.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    pub strict_paths: bool,
    pub refresh_timestamps: bool,
}

impl ModelConfig {
    /// Lenient paths, refreshing timestamps.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            strict_paths: false,
            refresh_timestamps: true,
        }
    }

    /// Strict paths, refreshing timestamps.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            strict_paths: true,
            refresh_timestamps: true,
        }
    }

    #[must_use]
    pub const fn with_refresh_timestamps(mut self, refresh: bool) -> Self {
        self.refresh_timestamps = refresh;
        self
    }

    /// Parse a config from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::lenient()
    }
}

///
/// TESTS
///
