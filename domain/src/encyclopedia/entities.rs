//! Encyclopedia result entities

use serde::{Deserialize, Deserializer, Serialize};

/// A resolved article summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiArticle {
    pub summary: String,
    /// Article link; absent for summary-only answers
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// The server's signal that a term maps to several subjects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disambiguation {
    #[serde(default)]
    pub message: String,
    /// Candidate terms in server ranking order. Never re-sorted or
    /// de-duplicated client-side.
    #[serde(default)]
    pub options: Vec<String>,
}

impl Disambiguation {
    pub fn contains(&self, candidate: &str) -> bool {
        self.options.iter().any(|option| option == candidate)
    }
}

/// Interpreted response of a phase-1 encyclopedia search.
///
/// A non-empty `summary` field selects [`EncyclopediaResult::Resolved`]; its
/// absence selects [`EncyclopediaResult::Ambiguous`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EncyclopediaResult {
    Resolved(WikiArticle),
    Ambiguous(Disambiguation),
}

/// Superset of both shapes, as sent on the wire
#[derive(Deserialize)]
struct WireEncyclopedia {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    options: Option<Vec<String>>,
}

impl From<WireEncyclopedia> for EncyclopediaResult {
    fn from(wire: WireEncyclopedia) -> Self {
        match wire.summary {
            Some(summary) if !summary.is_empty() => Self::Resolved(WikiArticle {
                summary,
                url: wire.url.filter(|u| !u.is_empty()),
                title: wire.title,
            }),
            _ => Self::Ambiguous(Disambiguation {
                message: wire.message.unwrap_or_default(),
                options: wire.options.unwrap_or_default(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for EncyclopediaResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        WireEncyclopedia::deserialize(deserializer).map(Self::from)
    }
}

impl EncyclopediaResult {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn article(&self) -> Option<&WikiArticle> {
        match self {
            Self::Resolved(article) => Some(article),
            Self::Ambiguous(_) => None,
        }
    }

    /// Convert a response that is contractually an article (forced
    /// resolution). Returns the disambiguation back if it is not.
    pub fn into_article(self) -> Result<WikiArticle, Disambiguation> {
        match self {
            Self::Resolved(article) => Ok(article),
            Self::Ambiguous(disambiguation) => Err(disambiguation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_selects_resolved() {
        let result: EncyclopediaResult =
            serde_json::from_str(r#"{"summary":"Python is...","url":"https://ko.wikipedia.org/wiki/x"}"#)
                .unwrap();
        let article = result.article().unwrap();
        assert_eq!(article.summary, "Python is...");
        assert_eq!(article.url.as_deref(), Some("https://ko.wikipedia.org/wiki/x"));
    }

    #[test]
    fn test_missing_summary_selects_ambiguous_in_server_order() {
        let result: EncyclopediaResult = serde_json::from_str(
            r#"{"message":"다의어","options":["파이썬(프로그래밍 언어)","파이썬(동물)","파이썬(동물)"]}"#,
        )
        .unwrap();
        match result {
            EncyclopediaResult::Ambiguous(d) => {
                assert_eq!(d.message, "다의어");
                assert_eq!(
                    d.options,
                    vec!["파이썬(프로그래밍 언어)", "파이썬(동물)", "파이썬(동물)"]
                );
            }
            other => panic!("Expected Ambiguous, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_summary_is_ambiguous() {
        let result: EncyclopediaResult =
            serde_json::from_str(r#"{"summary":"","message":"m"}"#).unwrap();
        assert!(!result.is_resolved());
    }

    #[test]
    fn test_resolved_without_url() {
        let result: EncyclopediaResult = serde_json::from_str(r#"{"summary":"only text"}"#).unwrap();
        assert_eq!(result.article().unwrap().url, None);
    }

    #[test]
    fn test_into_article() {
        let ambiguous = EncyclopediaResult::Ambiguous(Disambiguation::default());
        assert!(ambiguous.into_article().is_err());
        let resolved = EncyclopediaResult::Resolved(WikiArticle {
            summary: "s".into(),
            ..Default::default()
        });
        assert_eq!(resolved.into_article().unwrap().summary, "s");
    }
}
