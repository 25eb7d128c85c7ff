//! QueryText value object

use serde::{Deserialize, Serialize};

/// A trimmed, non-empty query string (Value Object)
///
/// Every panel sends its free-text input through this type, so emptiness is
/// checked in exactly one place. No other validation happens client-side:
/// a string that is not a URL is still a valid `QueryText`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryText {
    content: String,
}

impl QueryText {
    /// Try to create a query, returning None for empty or whitespace-only input
    pub fn try_new(content: impl AsRef<str>) -> Option<Self> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the trimmed content
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for QueryText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl AsRef<str> for QueryText {
    fn as_ref(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_trims() {
        let q = QueryText::try_new("  secure AI  ").unwrap();
        assert_eq!(q.as_str(), "secure AI");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(QueryText::try_new("").is_none());
        assert!(QueryText::try_new("   ").is_none());
        assert!(QueryText::try_new("\t\n").is_none());
    }

    #[test]
    fn test_non_url_text_is_accepted() {
        assert_eq!(QueryText::try_new("not a url").unwrap().as_str(), "not a url");
    }
}
