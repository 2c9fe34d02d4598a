//! Palette configuration.
//!
//! YAML with a default for every field:
//!
//! ```yaml
//! version: 1
//! base_color: "#007bff"
//! model: lch            # lch | hsl
//! active_scheme: split  # all | complementary | split | ...
//! grid_limit: 12
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::parse::try_parse;
use crate::scheme::SchemeModel;
use crate::select::{ActiveScheme, DEFAULT_LIMIT};

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Color the first palette is generated from.
    #[serde(default = "default_base_color")]
    pub base_color: String,

    /// Model the scheme offsets are applied in.
    #[serde(default)]
    pub model: SchemeModel,

    /// Scheme shown initially (`all` or a category name).
    #[serde(default = "default_active_scheme")]
    pub active_scheme: String,

    /// Maximum number of swatches in the grid.
    #[serde(default = "default_grid_limit")]
    pub grid_limit: usize,
}

fn default_version() -> u32 {
    1
}
fn default_base_color() -> String {
    "#007bff".to_string()
}
fn default_active_scheme() -> String {
    "split".to_string()
}
fn default_grid_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            base_color: default_base_color(),
            model: SchemeModel::default(),
            active_scheme: default_active_scheme(),
            grid_limit: default_grid_limit(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|err| {
            debug!(path = %path.display(), %err, "using default configuration");
            Self::default()
        })
    }

    /// Check values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        if self.grid_limit == 0 {
            return Err(Error::ConfigInvalid {
                key: "grid_limit".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        try_parse(&self.base_color).map_err(|e| Error::ConfigInvalid {
            key: "base_color".to_string(),
            message: e.to_string(),
        })?;

        self.active()?;
        Ok(())
    }

    /// The configured initial scheme.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] for an unknown scheme name.
    pub fn active(&self) -> Result<ActiveScheme> {
        self.active_scheme
            .parse()
            .map_err(|e: Error| Error::ConfigInvalid {
                key: "active_scheme".to_string(),
                message: e.to_string(),
            })
    }
}
