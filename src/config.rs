//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional JSON config
//! file, then environment variables. CLI flags are applied last by the
//! command layer.

use crate::app::services::reporter::ReportFormat;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CURRENCY, DEFAULT_INPUT_PATH, ENV_CURRENCY,
    ENV_INPUT_PATH,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reporter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog file to read
    pub input_path: PathBuf,

    /// Currency symbol appended to prices
    pub currency: String,

    /// Report output format
    pub output_format: ReportFormat,

    /// Colour headings in human output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            currency: DEFAULT_CURRENCY.to_string(),
            output_format: ReportFormat::Human,
            color: true,
        }
    }
}

impl Config {
    /// Default config file location (`<config dir>/catalog-report/config.json`)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load settings from a JSON file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;

        serde_json::from_str(&content).map_err(|e| {
            Error::serialization(format!("Invalid config file {}", path.display()), e)
        })
    }

    /// Load configuration using the layered approach (defaults -> file -> env)
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading config file: {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from environment lookups
    ///
    /// The lookup is injected so tests do not have to touch the process
    /// environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(input_path) = lookup(ENV_INPUT_PATH) {
            debug!("{} overrides input path", ENV_INPUT_PATH);
            self.input_path = PathBuf::from(input_path);
        }
        if let Some(currency) = lookup(ENV_CURRENCY) {
            debug!("{} overrides currency", ENV_CURRENCY);
            self.currency = currency;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(Error::configuration("Input path cannot be empty"));
        }

        if self.currency.trim().is_empty() {
            return Err(Error::configuration("Currency symbol cannot be empty"));
        }

        Ok(())
    }
}
