//! Resource search panel: keywords → ranked resources.
//!
//! A successful search with zero results is its own sub-state: the panel
//! must tell "nothing found" apart from "nothing asked yet".

use super::query_controller::{Lookup, QueryController, require_text};
use crate::ports::lookup_gateway::{GatewayError, LookupGateway};
use async_trait::async_trait;
use hub_domain::{Panel, QueryPhase, QueryText, ResourceSearchResult, ValidationError};

#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceLookup;

#[async_trait]
impl Lookup for ResourceLookup {
    type Input = String;
    type Request = QueryText;
    type Output = ResourceSearchResult;

    const PANEL: Panel = Panel::Resources;

    fn prepare(&self, input: &String) -> Result<QueryText, ValidationError> {
        require_text(Self::PANEL, input)
    }

    async fn fetch(
        &self,
        gateway: &dyn LookupGateway,
        keywords: &QueryText,
    ) -> Result<ResourceSearchResult, GatewayError> {
        gateway.search_resources(keywords).await
    }
}

pub type ResourceController = QueryController<ResourceLookup>;

/// What the resource panel body shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceView<'a> {
    /// No response received yet: the initial prompt
    Prompt,
    Loading,
    Failed(&'a str),
    /// A response arrived with an empty list
    NoResults(&'a ResourceSearchResult),
    Results(&'a ResourceSearchResult),
}

impl QueryController<ResourceLookup> {
    pub fn view(&self) -> ResourceView<'_> {
        match self.state().phase() {
            QueryPhase::Idle => ResourceView::Prompt,
            QueryPhase::Loading => ResourceView::Loading,
            QueryPhase::Error(message) => ResourceView::Failed(message),
            QueryPhase::Success(result) if result.is_empty() => ResourceView::NoResults(result),
            QueryPhase::Success(result) => ResourceView::Results(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::test_support::{Call, ScriptedGateway};
    use hub_domain::{PhaseKind, ResourceItem};

    fn item(title: &str, url: Option<&str>, via: &str) -> ResourceItem {
        ResourceItem {
            title: title.into(),
            summary: format!("{} summary", title),
            url: url.map(str::to_string),
            via: Some(via.into()),
        }
    }

    #[tokio::test]
    async fn test_whitespace_keywords_rejected_without_request() {
        let gateway = ScriptedGateway::new();
        let mut controller = ResourceController::default();

        controller.run(&gateway, "   ".into(), &NoProgress).await;

        assert_eq!(controller.view(), ResourceView::Failed("키워드를 입력해 주세요."));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_results_is_distinct_from_prompt() {
        let gateway = ScriptedGateway::new().with_resources(Ok(ResourceSearchResult::default()));
        let mut controller = ResourceController::default();
        assert_eq!(controller.view(), ResourceView::Prompt);

        let kind = controller.run(&gateway, "obscure".into(), &NoProgress).await;

        assert_eq!(kind, PhaseKind::Success);
        assert!(matches!(controller.view(), ResourceView::NoResults(_)));
        assert_ne!(controller.view(), ResourceView::Prompt);
    }

    #[tokio::test]
    async fn test_results_keep_server_order_and_provenance() {
        let result = ResourceSearchResult {
            results: vec![
                item("MITRE ATT&CK", Some("https://attack.mitre.org/"), "curated"),
                item("OWASP Top 10", Some("https://owasp.org/Top10/"), "curated"),
            ],
            used_fallback: true,
            fallback_reason: Some("AI 응답 없음".into()),
        };
        let gateway = ScriptedGateway::new().with_resources(Ok(result.clone()));
        let mut controller = ResourceController::default();

        controller
            .run(&gateway, "secure AI, XSS 대응".into(), &NoProgress)
            .await;

        match controller.view() {
            ResourceView::Results(found) => {
                assert_eq!(found, &result);
                assert_eq!(found.results[0].title, "MITRE ATT&CK");
                assert!(found.used_fallback);
            }
            other => panic!("Expected Results, got {:?}", other),
        }
        assert_eq!(
            gateway.calls(),
            vec![Call::Resources("secure AI, XSS 대응".into())]
        );
    }

    #[tokio::test]
    async fn test_request_error_uses_server_message_or_generic() {
        let gateway = ScriptedGateway::new()
            .with_resources(Err(GatewayError::Request {
                status: 400,
                message: Some("최소 한 개의 키워드를 입력해 주세요.".into()),
            }))
            .with_resources(Err(GatewayError::Request {
                status: 500,
                message: None,
            }));
        let mut controller = ResourceController::default();

        controller.run(&gateway, ",".into(), &NoProgress).await;
        assert_eq!(
            controller.view(),
            ResourceView::Failed("최소 한 개의 키워드를 입력해 주세요.")
        );

        controller.run(&gateway, "rust".into(), &NoProgress).await;
        assert_eq!(controller.view(), ResourceView::Failed("자료 검색에 실패했습니다."));
    }

    #[test]
    fn test_loading_view() {
        let mut controller = ResourceController::default();
        controller.begin("rust".into()).unwrap();
        assert_eq!(controller.view(), ResourceView::Loading);
        assert!(controller.is_loading());
    }
}
