//! Project configuration for the fault category export

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::{CatalogIntegrityError, FaultCategoryCatalog, FaultCategoryRecord};
use crate::export::DEFAULT_ARTIFACT_PATH;

/// Project configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where the JSON artifact is written and verified
    #[serde(default = "default_artifact")]
    pub artifact: PathBuf,

    /// User-defined categories (9xx codes only)
    #[serde(default)]
    pub custom: Vec<FaultCategoryRecord>,
}

fn default_artifact() -> PathBuf {
    PathBuf::from(DEFAULT_ARTIFACT_PATH)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            artifact: default_artifact(),
            custom: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from file
    ///
    /// A relative `artifact` is resolved against the directory holding the
    /// config file, so the result does not depend on the working directory.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e.to_string()))?;

        let mut config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else {
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?
        };

        if config.artifact.is_relative() {
            if let Some(dir) = path.parent() {
                config.artifact = dir.join(&config.artifact);
            }
        }
        Ok(config)
    }

    /// Load from default location (.wfc-faults.toml in the working
    /// directory or any of its parents)
    pub fn load_default() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir()
            .map_err(|e| ConfigError::Io(PathBuf::from("."), e.to_string()))?;
        Self::discover(&cwd)
    }

    /// Use the nearest config file found from `start` upwards, falling back
    /// to defaults relative to `start`.
    pub fn discover(start: &Path) -> Result<Self, ConfigError> {
        let candidates = [".wfc-faults.toml", ".wfc-faults.json", "wfc-faults.toml"];

        for dir in start.ancestors() {
            for name in candidates {
                let path = dir.join(name);
                if path.is_file() {
                    tracing::debug!(path = %path.display(), "loading config");
                    return Self::load(&path);
                }
            }
        }

        // No config file, return default
        Ok(Self {
            artifact: start.join(DEFAULT_ARTIFACT_PATH),
            ..Self::default()
        })
    }

    /// Built-in catalog extended with the configured custom categories
    ///
    /// # Errors
    ///
    /// Returns error if a custom category is invalid or collides with another.
    pub fn catalog(&self) -> Result<FaultCategoryCatalog, ConfigError> {
        let catalog = FaultCategoryCatalog::defined()?;
        if self.custom.is_empty() {
            return Ok(catalog);
        }
        Ok(catalog.with_custom(self.custom.iter().cloned())?)
    }

    /// Create example config file
    pub fn example() -> &'static str {
        r#"# wfc-faults configuration

# Where the JSON export of the catalog lives
artifact = "resources/wfc/faults/fault_categories.json"

# User-defined fault categories. Codes 900-999 are reserved for them.
# [[custom]]
# code = 900
# name = "Stack Trace Leaked In Error Response"
# test_case_label = "leaksStackTrace"
# description = "Error responses contain server stack traces."
"#
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read {0}: {1}")]
    Io(PathBuf, String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid custom category: {0}")]
    Catalog(#[from] CatalogIntegrityError),
}
