//! Lookup service configuration from TOML (`[api]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Raw API configuration from TOML
///
/// # Example
///
/// ```toml
/// [api]
/// base_url = "http://localhost:8000"
/// timeout_seconds = 20
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL every endpoint path is joined onto
    pub base_url: String,
    /// Per-request timeout. Absent means no client-side timeout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    /// `User-Agent` header sent with every request
    pub user_agent: String,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
            user_agent: format!("research-hub/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FileApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}
