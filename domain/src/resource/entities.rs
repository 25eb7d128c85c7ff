//! Resource search entities

use serde::{Deserialize, Serialize};

/// One researched resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceItem {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub url: Option<String>,
    /// Provenance tag, e.g. `perplexity`, `wikipedia`, `curated`
    #[serde(default)]
    pub via: Option<String>,
}

impl ResourceItem {
    /// List key: `url` if present, else `title`.
    ///
    /// Uniqueness within one response is assumed, not enforced.
    pub fn key(&self) -> &str {
        match self.url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => &self.title,
        }
    }
}

/// Successful response of the keyword research endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSearchResult {
    #[serde(default)]
    pub results: Vec<ResourceItem>,
    #[serde(default)]
    pub used_fallback: bool,
    #[serde(default)]
    pub fallback_reason: Option<String>,
}

impl ResourceSearchResult {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
