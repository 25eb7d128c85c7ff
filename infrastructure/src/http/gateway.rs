//! reqwest-backed [`LookupGateway`]

use super::wire::{ErrorField, decode};
use crate::config::{ConfigError, FileApiConfig};
use async_trait::async_trait;
use hub_application::{GatewayError, LookupGateway};
use hub_domain::{
    EncyclopediaResult, Language, QueryText, ResourceSearchResult, ServiceHealth, SummaryResult,
    WikiArticle,
};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, trace};

const SUMMARIZE_PATH: &str = "api/summarize-url";
const RESOURCES_PATH: &str = "api/resources/search";
const WIKI_SEARCH_PATH: &str = "api/wiki/search";
const WIKI_FORCE_PATH: &str = "api/wiki/force";
const HEALTH_PATH: &str = "health";

/// HTTP client for the lookup service.
///
/// One attempt per call. No retries, no caching.
#[derive(Debug, Clone)]
pub struct HttpLookupGateway {
    client: Client,
    base_url: Url,
}

impl HttpLookupGateway {
    pub fn new(config: &FileApiConfig) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        self.base_url
            .join(path)
            .map_err(|e| GatewayError::Transport(format!("Invalid endpoint '{}': {}", path, e)))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        field: ErrorField,
    ) -> Result<T, GatewayError> {
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to read response body: {}", e)))?;
        trace!(status = status.as_u16(), bytes = body.len(), "Response received");

        decode(status, &body, field)
    }

    async fn wiki_get(
        &self,
        path: &str,
        term: &QueryText,
        language: Language,
    ) -> Result<EncyclopediaResult, GatewayError> {
        let url = self.endpoint(path)?;
        debug!(endpoint = %url, lang = %language, "GET");
        let request = self
            .client
            .get(url)
            .query(&[("term", term.as_str()), ("lang", language.code())]);
        self.send(request, ErrorField::MessageThenError).await
    }
}

/// Absolute http(s) base with a trailing slash, so relative endpoint paths
/// extend it instead of replacing its last segment.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[async_trait]
impl LookupGateway for HttpLookupGateway {
    async fn summarize_url(&self, url: &QueryText) -> Result<SummaryResult, GatewayError> {
        let endpoint = self.endpoint(SUMMARIZE_PATH)?;
        debug!(endpoint = %endpoint, "POST");
        let request = self.client.post(endpoint).json(&json!({ "url": url }));
        self.send(request, ErrorField::Error).await
    }

    async fn search_resources(
        &self,
        keywords: &QueryText,
    ) -> Result<ResourceSearchResult, GatewayError> {
        let endpoint = self.endpoint(RESOURCES_PATH)?;
        debug!(endpoint = %endpoint, "POST");
        let request = self
            .client
            .post(endpoint)
            .json(&json!({ "keywords": keywords }));
        self.send(request, ErrorField::Error).await
    }

    async fn wiki_search(
        &self,
        term: &QueryText,
        language: Language,
    ) -> Result<EncyclopediaResult, GatewayError> {
        self.wiki_get(WIKI_SEARCH_PATH, term, language).await
    }

    async fn wiki_force(
        &self,
        term: &QueryText,
        language: Language,
    ) -> Result<WikiArticle, GatewayError> {
        self.wiki_get(WIKI_FORCE_PATH, term, language)
            .await?
            .into_article()
            .map_err(|disambiguation| {
                GatewayError::Transport(format!(
                    "Expected an article for '{}' but received {} candidates",
                    term,
                    disambiguation.options.len()
                ))
            })
    }

    async fn health(&self) -> Result<ServiceHealth, GatewayError> {
        let endpoint = self.endpoint(HEALTH_PATH)?;
        debug!(endpoint = %endpoint, "GET");
        self.send(self.client.get(endpoint), ErrorField::Error).await
    }
}
