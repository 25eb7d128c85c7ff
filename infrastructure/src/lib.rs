//! Infrastructure layer for research-hub
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the HTTP gateway to the lookup service and
//! configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileApiConfig, FileConfig, FileOutputConfig, FileTuiConfig,
    FileWikiConfig,
};
pub use http::HttpLookupGateway;
