//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod output;
mod tui;
mod wiki;

pub use api::{DEFAULT_BASE_URL, FileApiConfig};
pub use output::FileOutputConfig;
pub use tui::FileTuiConfig;
pub use wiki::FileWikiConfig;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Config file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("api.base_url '{value}' is invalid: {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("api.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("tui.tick_rate_ms cannot be 0")]
    InvalidTickRate,

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Lookup service settings
    pub api: FileApiConfig,
    /// Encyclopedia settings
    pub wiki: FileWikiConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// TUI settings
    pub tui: FileTuiConfig,
}

impl FileConfig {
    /// Validate the merged configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.api.base_url).map_err(|e| {
            ConfigError::InvalidBaseUrl {
                value: self.api.base_url.clone(),
                reason: e.to_string(),
            }
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                value: self.api.base_url.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        if self.api.timeout_seconds == Some(0) {
            return Err(ConfigError::InvalidTimeout);
        }
        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidTickRate);
        }
        Ok(())
    }
}
