//! Output format value object

use serde::{Deserialize, Serialize};

/// How one-shot lookups print their final panel state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human-readable rendering (default)
    #[default]
    Text,
    /// The panel state as pretty-printed JSON
    Json,
}
