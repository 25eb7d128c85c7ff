//! Summarize panel: URL → summary + citations.
//!
//! Only emptiness is validated client-side. Anything else, including text
//! that is not a URL, is forwarded for the service to judge.

use super::query_controller::{Lookup, QueryController, require_text};
use crate::ports::lookup_gateway::{GatewayError, LookupGateway};
use async_trait::async_trait;
use hub_domain::{Panel, QueryText, SummaryResult, ValidationError};

#[derive(Debug, Clone, Copy, Default)]
pub struct SummarizeLookup;

#[async_trait]
impl Lookup for SummarizeLookup {
    type Input = String;
    type Request = QueryText;
    type Output = SummaryResult;

    const PANEL: Panel = Panel::Summarize;

    fn prepare(&self, input: &String) -> Result<QueryText, ValidationError> {
        require_text(Self::PANEL, input)
    }

    async fn fetch(
        &self,
        gateway: &dyn LookupGateway,
        url: &QueryText,
    ) -> Result<SummaryResult, GatewayError> {
        gateway.summarize_url(url).await
    }
}

pub type SummarizeController = QueryController<SummarizeLookup>;

impl QueryController<SummarizeLookup> {
    /// `(usedFallback, fallbackReason)` of a successful summary.
    ///
    /// Informational only: a fallback summary is still `Success`.
    pub fn provenance(&self) -> Option<(bool, Option<&str>)> {
        self.state()
            .result()
            .map(|result| (result.used_fallback, result.fallback_reason.as_deref()))
    }
}
