//! Encyclopedia panel: two-phase disambiguation state machine.
//!
//! ```text
//! Idle ──search──> Searching ──> Resolved | Ambiguous | Error
//! Ambiguous ──force(candidate)──> Forcing ──> Resolved | Error
//! ```
//!
//! `search` and `force` from any state supersede whatever is in flight; the
//! generation check in [`EncyclopediaController::complete`] discards the
//! older answer. `force` is only accepted from `Ambiguous` and only for a
//! candidate the server offered. It always uses the controller's selected
//! language, never one embedded in the candidate text.

use super::query_controller::require_text;
use crate::ports::lookup_gateway::{GatewayError, LookupGateway};
use crate::ports::progress::ProgressNotifier;
use hub_domain::util::truncate_str;
use hub_domain::{
    Disambiguation, EncyclopediaResult, Language, Panel, PhaseKind, QueryText, ValidationError,
    WikiArticle,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

const PANEL: Panel = Panel::Encyclopedia;

/// Rejected attempt to force a candidate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForceError {
    #[error("No candidates to choose from")]
    NotAmbiguous,

    #[error("'{0}' is not one of the offered candidates")]
    UnknownCandidate(String),

    #[error("Candidate #{index} out of range ({len} offered)")]
    OptionOutOfRange { index: usize, len: usize },
}

/// State of the encyclopedia panel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "phase", content = "value", rename_all = "snake_case")]
pub enum EncyclopediaPhase {
    Idle,
    /// Phase-1 request in flight
    Searching { term: QueryText },
    /// The term is ambiguous; the user must pick a candidate
    Ambiguous {
        term: QueryText,
        disambiguation: Disambiguation,
    },
    /// Phase-2 request in flight. The candidates stay visible but inert.
    Forcing {
        candidate: QueryText,
        disambiguation: Disambiguation,
    },
    Resolved(WikiArticle),
    Error(String),
}

impl EncyclopediaPhase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Self::Idle => PhaseKind::Idle,
            Self::Searching { .. } | Self::Forcing { .. } => PhaseKind::Loading,
            Self::Ambiguous { .. } | Self::Resolved(_) => PhaseKind::Success,
            Self::Error(_) => PhaseKind::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WikiRequestKind {
    /// `wiki/search`
    Search,
    /// `wiki/force`
    Force,
}

/// A request accepted by the controller, tagged with its generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiRequest {
    pub generation: u64,
    pub kind: WikiRequestKind,
    pub term: QueryText,
    pub language: Language,
}

impl WikiRequest {
    /// Issue the request against the gateway
    pub async fn execute(&self, gateway: &dyn LookupGateway) -> WikiOutcome {
        match self.kind {
            WikiRequestKind::Search => {
                WikiOutcome::Search(gateway.wiki_search(&self.term, self.language).await)
            }
            WikiRequestKind::Force => {
                WikiOutcome::Force(gateway.wiki_force(&self.term, self.language).await)
            }
        }
    }
}

/// Answer to a [`WikiRequest`]
#[derive(Debug, Clone, PartialEq)]
pub enum WikiOutcome {
    Search(Result<EncyclopediaResult, GatewayError>),
    Force(Result<WikiArticle, GatewayError>),
}

/// Drives the encyclopedia panel
#[derive(Debug, Clone)]
pub struct EncyclopediaController {
    phase: EncyclopediaPhase,
    language: Language,
    generation: u64,
}

impl Default for EncyclopediaController {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl EncyclopediaController {
    pub fn new(language: Language) -> Self {
        Self {
            phase: EncyclopediaPhase::Idle,
            language,
            generation: 0,
        }
    }

    pub fn phase(&self) -> &EncyclopediaPhase {
        &self.phase
    }

    pub fn kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn is_loading(&self) -> bool {
        self.kind() == PhaseKind::Loading
    }

    /// Currently selected language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Change the selected language. Takes effect on the next request.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn article(&self) -> Option<&WikiArticle> {
        match &self.phase {
            EncyclopediaPhase::Resolved(article) => Some(article),
            _ => None,
        }
    }

    /// Candidates on display, in server order (also while forcing)
    pub fn disambiguation(&self) -> Option<&Disambiguation> {
        match &self.phase {
            EncyclopediaPhase::Ambiguous { disambiguation, .. }
            | EncyclopediaPhase::Forcing { disambiguation, .. } => Some(disambiguation),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            EncyclopediaPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Accept a phase-1 search for `term` in `language`.
    ///
    /// The language becomes the selected language. Empty terms move to
    /// `Error` and no request may be issued.
    pub fn begin_search(
        &mut self,
        term: &str,
        language: Language,
    ) -> Result<WikiRequest, ValidationError> {
        self.generation += 1;
        self.language = language;

        let term = match require_text(PANEL, term) {
            Ok(term) => term,
            Err(error) => {
                debug!(panel = %PANEL, "Rejected empty search term");
                self.phase = EncyclopediaPhase::Error(error.message().to_string());
                return Err(error);
            }
        };

        debug!(
            panel = %PANEL,
            generation = self.generation,
            lang = %language,
            "Searching '{}'",
            truncate_str(term.as_str(), 80)
        );
        self.phase = EncyclopediaPhase::Searching { term: term.clone() };
        Ok(WikiRequest {
            generation: self.generation,
            kind: WikiRequestKind::Search,
            term,
            language,
        })
    }

    /// Accept a phase-2 forced lookup of one offered candidate.
    ///
    /// Leaves the state untouched when rejected.
    pub fn begin_force(&mut self, candidate: &str) -> Result<WikiRequest, ForceError> {
        let disambiguation = match &self.phase {
            EncyclopediaPhase::Ambiguous { disambiguation, .. } => disambiguation,
            _ => return Err(ForceError::NotAmbiguous),
        };
        if !disambiguation.contains(candidate) {
            return Err(ForceError::UnknownCandidate(candidate.to_string()));
        }
        let term = QueryText::try_new(candidate)
            .ok_or_else(|| ForceError::UnknownCandidate(candidate.to_string()))?;

        let disambiguation = disambiguation.clone();
        self.generation += 1;
        debug!(
            panel = %PANEL,
            generation = self.generation,
            lang = %self.language,
            "Forcing candidate '{}'",
            truncate_str(term.as_str(), 80)
        );
        self.phase = EncyclopediaPhase::Forcing {
            candidate: term.clone(),
            disambiguation,
        };
        Ok(WikiRequest {
            generation: self.generation,
            kind: WikiRequestKind::Force,
            term,
            language: self.language,
        })
    }

    /// [`begin_force`](Self::begin_force) by 0-based position in the candidate list
    pub fn begin_force_option(&mut self, index: usize) -> Result<WikiRequest, ForceError> {
        let candidate = match &self.phase {
            EncyclopediaPhase::Ambiguous { disambiguation, .. } => disambiguation
                .options
                .get(index)
                .cloned()
                .ok_or(ForceError::OptionOutOfRange {
                    index,
                    len: disambiguation.options.len(),
                })?,
            _ => return Err(ForceError::NotAmbiguous),
        };
        self.begin_force(&candidate)
    }

    /// Apply the answer to a request.
    ///
    /// Returns `false` and leaves the state untouched when the answer belongs
    /// to a superseded request.
    pub fn complete(&mut self, generation: u64, outcome: WikiOutcome) -> bool {
        let expected_phase = match (&self.phase, &outcome) {
            (EncyclopediaPhase::Searching { .. }, WikiOutcome::Search(_)) => true,
            (EncyclopediaPhase::Forcing { .. }, WikiOutcome::Force(_)) => true,
            _ => false,
        };
        if generation != self.generation || !expected_phase {
            debug!(
                panel = %PANEL,
                generation,
                current = self.generation,
                "Discarding stale completion"
            );
            return false;
        }

        let previous = std::mem::replace(&mut self.phase, EncyclopediaPhase::Idle);
        self.phase = match (previous, outcome) {
            (_, WikiOutcome::Search(Ok(EncyclopediaResult::Resolved(article))))
            | (_, WikiOutcome::Force(Ok(article))) => {
                info!(panel = %PANEL, generation, "Article resolved");
                EncyclopediaPhase::Resolved(article)
            }
            (
                EncyclopediaPhase::Searching { term },
                WikiOutcome::Search(Ok(EncyclopediaResult::Ambiguous(disambiguation))),
            ) => {
                info!(
                    panel = %PANEL,
                    generation,
                    candidates = disambiguation.options.len(),
                    "Term is ambiguous"
                );
                EncyclopediaPhase::Ambiguous {
                    term,
                    disambiguation,
                }
            }
            (_, WikiOutcome::Search(Err(error))) | (_, WikiOutcome::Force(Err(error))) => {
                warn!(panel = %PANEL, generation, "Request failed: {}", error);
                EncyclopediaPhase::Error(error.user_message(PANEL.failure_message()))
            }
            // Guarded above: an ambiguous search answer only arrives while Searching
            (_, WikiOutcome::Search(Ok(EncyclopediaResult::Ambiguous(_)))) => {
                EncyclopediaPhase::Error(PANEL.failure_message().to_string())
            }
        };
        true
    }

    /// Phase-1 search, inline. Returns the resulting phase kind.
    pub async fn search(
        &mut self,
        gateway: &dyn LookupGateway,
        term: &str,
        language: Language,
        progress: &dyn ProgressNotifier,
    ) -> PhaseKind {
        match self.begin_search(term, language) {
            Ok(request) => self.dispatch(gateway, request, progress).await,
            Err(_) => self.kind(),
        }
    }

    /// Phase-2 forced lookup of an offered candidate, inline.
    pub async fn force(
        &mut self,
        gateway: &dyn LookupGateway,
        candidate: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<PhaseKind, ForceError> {
        let request = self.begin_force(candidate)?;
        Ok(self.dispatch(gateway, request, progress).await)
    }

    /// Phase-2 forced lookup by 0-based candidate position, inline.
    pub async fn force_option(
        &mut self,
        gateway: &dyn LookupGateway,
        index: usize,
        progress: &dyn ProgressNotifier,
    ) -> Result<PhaseKind, ForceError> {
        let request = self.begin_force_option(index)?;
        Ok(self.dispatch(gateway, request, progress).await)
    }

    async fn dispatch(
        &mut self,
        gateway: &dyn LookupGateway,
        request: WikiRequest,
        progress: &dyn ProgressNotifier,
    ) -> PhaseKind {
        progress.on_request_start(PANEL, PANEL.loading_label());
        let outcome = request.execute(gateway).await;
        self.complete(request.generation, outcome);
        let kind = self.kind();
        progress.on_request_end(PANEL, kind);
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::test_support::{Call, ScriptedGateway};

    fn ambiguous(options: &[&str]) -> EncyclopediaResult {
        EncyclopediaResult::Ambiguous(Disambiguation {
            message: "다의어".into(),
            options: options.iter().map(|o| o.to_string()).collect(),
        })
    }

    fn article(summary: &str, url: Option<&str>) -> WikiArticle {
        WikiArticle {
            summary: summary.into(),
            url: url.map(str::to_string),
            title: None,
        }
    }

    #[tokio::test]
    async fn test_disambiguation_round_trip() {
        let gateway = ScriptedGateway::new()
            .with_wiki_search(Ok(ambiguous(&["파이썬(프로그래밍 언어)", "파이썬(동물)"])))
            .with_wiki_force(Ok(article("비단뱀과의 뱀", Some("https://ko.wikipedia.org/wiki/x"))));
        let mut controller = EncyclopediaController::default();

        let kind = controller
            .search(&gateway, "파이썬", Language::Ko, &NoProgress)
            .await;
        assert_eq!(kind, PhaseKind::Success);
        let candidates = controller.disambiguation().unwrap();
        assert_eq!(candidates.message, "다의어");
        assert_eq!(
            candidates.options,
            vec!["파이썬(프로그래밍 언어)", "파이썬(동물)"]
        );

        let kind = controller
            .force_option(&gateway, 1, &NoProgress)
            .await
            .unwrap();
        assert_eq!(kind, PhaseKind::Success);
        assert_eq!(
            controller.article().unwrap().url.as_deref(),
            Some("https://ko.wikipedia.org/wiki/x")
        );
        assert_eq!(
            gateway.calls(),
            vec![
                Call::WikiSearch("파이썬".into(), Language::Ko),
                Call::WikiForce("파이썬(동물)".into(), Language::Ko),
            ]
        );
    }

    #[tokio::test]
    async fn test_summary_resolves_directly() {
        let gateway = ScriptedGateway::new()
            .with_wiki_search(Ok(EncyclopediaResult::Resolved(article("요약", None))));
        let mut controller = EncyclopediaController::default();

        controller
            .search(&gateway, " 머신 러닝 ", Language::En, &NoProgress)
            .await;

        let resolved = controller.article().unwrap();
        assert_eq!(resolved.summary, "요약");
        assert!(resolved.url.is_none());
        assert_eq!(
            gateway.calls(),
            vec![Call::WikiSearch("머신 러닝".into(), Language::En)]
        );
    }

    #[tokio::test]
    async fn test_empty_term_rejected_without_request() {
        let gateway = ScriptedGateway::new();
        let mut controller = EncyclopediaController::default();

        let kind = controller
            .search(&gateway, "  ", Language::Ko, &NoProgress)
            .await;

        assert_eq!(kind, PhaseKind::Error);
        assert_eq!(controller.error_message(), Some("검색어를 입력해 주세요."));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_force_uses_selected_language() {
        let gateway = ScriptedGateway::new()
            .with_wiki_search(Ok(ambiguous(&["Python (ja)", "Python"])))
            .with_wiki_force(Ok(article("s", None)));
        let mut controller = EncyclopediaController::default();

        controller
            .search(&gateway, "Python", Language::En, &NoProgress)
            .await;
        controller.set_language(Language::Ja);
        controller
            .force(&gateway, "Python (ja)", &NoProgress)
            .await
            .unwrap();

        assert_eq!(
            gateway.calls()[1],
            Call::WikiForce("Python (ja)".into(), Language::Ja)
        );
    }

    #[tokio::test]
    async fn test_force_error_drops_candidates() {
        let gateway = ScriptedGateway::new()
            .with_wiki_search(Ok(ambiguous(&["배(과일)", "배(선박)"])))
            .with_wiki_force(Err(GatewayError::Request {
                status: 404,
                message: Some("항목을 찾을 수 없습니다.".into()),
            }));
        let mut controller = EncyclopediaController::default();

        controller.search(&gateway, "배", Language::Ko, &NoProgress).await;
        let kind = controller.force(&gateway, "배(선박)", &NoProgress).await.unwrap();

        assert_eq!(kind, PhaseKind::Error);
        assert_eq!(controller.error_message(), Some("항목을 찾을 수 없습니다."));
        assert!(controller.disambiguation().is_none());
    }

    #[tokio::test]
    async fn test_search_transport_error() {
        let gateway = ScriptedGateway::new()
            .with_wiki_search(Err(GatewayError::Transport("dns error".into())));
        let mut controller = EncyclopediaController::default();

        controller.search(&gateway, "x", Language::Ko, &NoProgress).await;
        assert_eq!(controller.error_message(), Some("dns error"));
    }

    #[test]
    fn test_force_rejected_outside_ambiguous() {
        let mut controller = EncyclopediaController::default();
        assert_eq!(controller.begin_force("x"), Err(ForceError::NotAmbiguous));
        assert_eq!(controller.phase(), &EncyclopediaPhase::Idle);
        assert_eq!(controller.generation(), 0);
    }

    #[test]
    fn test_force_rejects_unknown_candidate_and_bad_index() {
        let mut controller = EncyclopediaController::default();
        let request = controller.begin_search("배", Language::Ko).unwrap();
        controller.complete(
            request.generation,
            WikiOutcome::Search(Ok(ambiguous(&["배(과일)"]))),
        );

        assert_eq!(
            controller.begin_force("배(동음이의어)"),
            Err(ForceError::UnknownCandidate("배(동음이의어)".into()))
        );
        assert_eq!(
            controller.begin_force_option(3),
            Err(ForceError::OptionOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(controller.kind(), PhaseKind::Success);
        assert!(controller.disambiguation().is_some());
    }

    #[test]
    fn test_candidates_stay_visible_while_forcing() {
        let mut controller = EncyclopediaController::default();
        let request = controller.begin_search("배", Language::Ko).unwrap();
        controller.complete(
            request.generation,
            WikiOutcome::Search(Ok(ambiguous(&["배(과일)", "배(선박)"]))),
        );
        let force = controller.begin_force_option(0).unwrap();

        assert_eq!(force.kind, WikiRequestKind::Force);
        assert_eq!(force.term.as_str(), "배(과일)");
        assert!(controller.is_loading());
        assert_eq!(controller.disambiguation().unwrap().options.len(), 2);
    }

    #[test]
    fn test_stale_search_answer_is_discarded() {
        let mut controller = EncyclopediaController::default();
        let first = controller.begin_search("a", Language::Ko).unwrap();
        let second = controller.begin_search("b", Language::Ko).unwrap();

        assert!(!controller.complete(
            first.generation,
            WikiOutcome::Search(Ok(EncyclopediaResult::Resolved(article("old", None))))
        ));
        assert!(controller.is_loading());

        assert!(controller.complete(
            second.generation,
            WikiOutcome::Search(Ok(EncyclopediaResult::Resolved(article("new", None))))
        ));
        assert_eq!(controller.article().unwrap().summary, "new");
    }

    #[test]
    fn test_outcome_kind_must_match_phase() {
        let mut controller = EncyclopediaController::default();
        let request = controller.begin_search("a", Language::Ko).unwrap();
        assert!(!controller.complete(
            request.generation,
            WikiOutcome::Force(Ok(article("s", None)))
        ));
        assert!(controller.is_loading());
    }

    #[test]
    fn test_phase_serializes_with_tag() {
        let controller = EncyclopediaController::default();
        let json = serde_json::to_value(controller.phase()).unwrap();
        assert_eq!(json["phase"], "idle");
    }
}
