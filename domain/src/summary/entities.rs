//! Summary result entities

use crate::panel::CITATIONS_HEADING;
use serde::{Deserialize, Serialize};

/// Optional descriptive data attached to a citation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationMetadata {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// A source backing a summary.
///
/// `url` may be absent, in which case `metadata` supplies the link target
/// and the display label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireCitation")]
pub struct Citation {
    pub url: Option<String>,
    pub metadata: Option<CitationMetadata>,
}

/// Citations arrive either as objects or as bare URL strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireCitation {
    Link(String),
    Entry {
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        metadata: Option<CitationMetadata>,
    },
}

impl From<WireCitation> for Citation {
    fn from(wire: WireCitation) -> Self {
        match wire {
            WireCitation::Link(url) => Self {
                url: Some(url),
                metadata: None,
            },
            WireCitation::Entry { url, metadata } => Self { url, metadata },
        }
    }
}

impl Citation {
    pub fn link(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            metadata: None,
        }
    }

    fn non_empty(value: Option<&String>) -> Option<&str> {
        value.map(String::as_str).filter(|s| !s.is_empty())
    }

    /// Link target: `url`, else `metadata.url`
    pub fn href(&self) -> Option<&str> {
        Self::non_empty(self.url.as_ref())
            .or_else(|| Self::non_empty(self.metadata.as_ref().and_then(|m| m.url.as_ref())))
    }

    /// Display label: `url`, else `metadata.title`, else `출처 N` where N is
    /// the 1-based position in the citation list.
    pub fn label(&self, index: usize) -> String {
        Self::non_empty(self.url.as_ref())
            .or_else(|| Self::non_empty(self.metadata.as_ref().and_then(|m| m.title.as_ref())))
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} {}", CITATIONS_HEADING, index + 1))
    }
}

/// Successful response of the URL summarization endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub source_title: String,
    pub summary: String,
    #[serde(default)]
    pub citations: Vec<Citation>,
    #[serde(default)]
    pub used_fallback: bool,
    #[serde(default)]
    pub fallback_reason: Option<String>,
}

impl SummaryResult {
    pub fn has_citations(&self) -> bool {
        !self.citations.is_empty()
    }

    /// Title to show for the source link, falling back to the URL itself
    pub fn display_title(&self) -> &str {
        if self.source_title.trim().is_empty() {
            &self.source_url
        } else {
            &self.source_title
        }
    }
}
