//! Lookup Gateway port
//!
//! Defines the interface for talking to the remote lookup service. One method
//! per endpoint; the HTTP adapter lives in the infrastructure layer.

use async_trait::async_trait;
use hub_domain::{
    EncyclopediaResult, Language, QueryText, ResourceSearchResult, ServiceHealth, SummaryResult,
    WikiArticle,
};
use thiserror::Error;

/// Errors that can occur during a lookup request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The service answered with a status outside 2xx
    #[error("Request failed with status {status}{}", detail_suffix(.message))]
    Request {
        status: u16,
        /// The body's `error`/`message` field, when present
        message: Option<String>,
    },

    /// The request never produced a usable answer (network failure,
    /// malformed body)
    #[error("{0}")]
    Transport(String),
}

fn detail_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

impl GatewayError {
    /// Message to surface to the user.
    ///
    /// Server-provided messages are passed through verbatim; a failed
    /// request without one falls back to the panel's generic copy.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Request {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            Self::Request { .. } => fallback.to_string(),
            Self::Transport(message) => message.clone(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Gateway to the remote lookup service
///
/// Each call is a single attempt: implementations must not retry.
#[async_trait]
pub trait LookupGateway: Send + Sync {
    /// `POST summarize-url` with `{url}`
    async fn summarize_url(&self, url: &QueryText) -> Result<SummaryResult, GatewayError>;

    /// `POST resources/search` with `{keywords}`
    async fn search_resources(
        &self,
        keywords: &QueryText,
    ) -> Result<ResourceSearchResult, GatewayError>;

    /// `GET wiki/search?term=&lang=` (phase 1)
    async fn wiki_search(
        &self,
        term: &QueryText,
        language: Language,
    ) -> Result<EncyclopediaResult, GatewayError>;

    /// `GET wiki/force?term=&lang=` (phase 2, always an article)
    async fn wiki_force(
        &self,
        term: &QueryText,
        language: Language,
    ) -> Result<WikiArticle, GatewayError>;

    /// `GET /health`
    async fn health(&self) -> Result<ServiceHealth, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_message() {
        let error = GatewayError::Request {
            status: 400,
            message: Some("유효하지 않은 URL".into()),
        };
        assert_eq!(error.user_message("요약에 실패했습니다."), "유효하지 않은 URL");
    }

    #[test]
    fn test_user_message_falls_back_without_server_message() {
        let error = GatewayError::Request {
            status: 502,
            message: None,
        };
        assert_eq!(error.user_message("요약에 실패했습니다."), "요약에 실패했습니다.");

        let blank = GatewayError::Request {
            status: 500,
            message: Some("  ".into()),
        };
        assert_eq!(blank.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_transport_message_is_passed_through() {
        let error = GatewayError::Transport("connection refused".into());
        assert!(error.is_transport());
        assert_eq!(error.user_message("fallback"), "connection refused");
    }

    #[test]
    fn test_display() {
        let error = GatewayError::Request {
            status: 404,
            message: Some("없음".into()),
        };
        assert_eq!(error.to_string(), "Request failed with status 404: 없음");
        let bare = GatewayError::Request {
            status: 500,
            message: None,
        };
        assert_eq!(bare.to_string(), "Request failed with status 500");
    }
}
