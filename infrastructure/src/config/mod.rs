//! Configuration file loading for research-hub
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `RESEARCH_HUB_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./research-hub.toml` or `./.research-hub.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/research-hub/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigError, DEFAULT_BASE_URL, FileApiConfig, FileConfig, FileOutputConfig, FileTuiConfig,
    FileWikiConfig,
};
pub use loader::ConfigLoader;
