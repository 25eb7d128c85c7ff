//! TUI configuration from TOML (`[tui]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Redraw interval for spinners (milliseconds)
    pub tick_rate_ms: u64,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

impl FileTuiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(16))
    }
}
