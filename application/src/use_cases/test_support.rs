//! Scripted gateway shared by controller tests.

use crate::ports::lookup_gateway::{GatewayError, LookupGateway};
use async_trait::async_trait;
use hub_domain::{
    EncyclopediaResult, Language, QueryText, ResourceSearchResult, ServiceHealth, SummaryResult,
    WikiArticle,
};
use std::collections::VecDeque;
use std::sync::Mutex;

/// A request observed by [`ScriptedGateway`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Summarize(String),
    Resources(String),
    WikiSearch(String, Language),
    WikiForce(String, Language),
    Health,
}

type Queue<T> = Mutex<VecDeque<Result<T, GatewayError>>>;

/// Gateway answering from per-endpoint queues and recording every call
#[derive(Default)]
pub(crate) struct ScriptedGateway {
    summaries: Queue<SummaryResult>,
    resources: Queue<ResourceSearchResult>,
    wiki_searches: Queue<EncyclopediaResult>,
    wiki_forces: Queue<WikiArticle>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedGateway {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_summary(self, response: Result<SummaryResult, GatewayError>) -> Self {
        self.summaries.lock().unwrap().push_back(response);
        self
    }

    pub(crate) fn with_resources(
        self,
        response: Result<ResourceSearchResult, GatewayError>,
    ) -> Self {
        self.resources.lock().unwrap().push_back(response);
        self
    }

    pub(crate) fn with_wiki_search(
        self,
        response: Result<EncyclopediaResult, GatewayError>,
    ) -> Self {
        self.wiki_searches.lock().unwrap().push_back(response);
        self
    }

    pub(crate) fn with_wiki_force(self, response: Result<WikiArticle, GatewayError>) -> Self {
        self.wiki_forces.lock().unwrap().push_back(response);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn next<T>(queue: &Queue<T>) -> Result<T, GatewayError> {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Transport("No scripted response".into())))
    }
}

#[async_trait]
impl LookupGateway for ScriptedGateway {
    async fn summarize_url(&self, url: &QueryText) -> Result<SummaryResult, GatewayError> {
        self.record(Call::Summarize(url.to_string()));
        Self::next(&self.summaries)
    }

    async fn search_resources(
        &self,
        keywords: &QueryText,
    ) -> Result<ResourceSearchResult, GatewayError> {
        self.record(Call::Resources(keywords.to_string()));
        Self::next(&self.resources)
    }

    async fn wiki_search(
        &self,
        term: &QueryText,
        language: Language,
    ) -> Result<EncyclopediaResult, GatewayError> {
        self.record(Call::WikiSearch(term.to_string(), language));
        Self::next(&self.wiki_searches)
    }

    async fn wiki_force(
        &self,
        term: &QueryText,
        language: Language,
    ) -> Result<WikiArticle, GatewayError> {
        self.record(Call::WikiForce(term.to_string(), language));
        Self::next(&self.wiki_forces)
    }

    async fn health(&self) -> Result<ServiceHealth, GatewayError> {
        self.record(Call::Health);
        Ok(ServiceHealth {
            status: "ok".into(),
            ai_ready: true,
        })
    }
}
