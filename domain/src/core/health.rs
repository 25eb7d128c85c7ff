//! Service health report

use serde::{Deserialize, Serialize};

/// Body of the lookup service's `/health` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    /// Whether the upstream AI client is configured on the server.
    /// Without it summarization and research answer with errors.
    #[serde(rename = "perplexity", default)]
    pub ai_ready: bool,
}

impl ServiceHealth {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
