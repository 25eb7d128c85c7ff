//! Generic query controller
//!
//! One state machine shared by every one-shot panel. A [`Lookup`] supplies
//! the panel-specific parts (input validation, which endpoint to call, result
//! type); [`QueryController`] owns the transitions:
//!
//! ```text
//! Idle | Success | Error ──begin──> Loading ──complete──> Success | Error
//!        (empty input) ──begin──> Error          (no request issued)
//! ```
//!
//! Every `begin` increments the controller's generation. A completion is
//! applied only if it carries the current generation, so a slow response to
//! an earlier submission can never overwrite a later one.

use crate::ports::lookup_gateway::{GatewayError, LookupGateway};
use crate::ports::progress::ProgressNotifier;
use async_trait::async_trait;
use hub_domain::util::truncate_str;
use hub_domain::{Panel, PhaseKind, QueryState, QueryText, ValidationError};
use tracing::{debug, info, warn};

/// Panel-specific half of a query controller
#[async_trait]
pub trait Lookup: Clone + Send + Sync + 'static {
    /// Raw user input, as stored in the panel state
    type Input: Clone + Send + Sync + 'static;
    /// Validated request sent to the gateway
    type Request: Clone + Send + Sync + 'static;
    /// Typed success body
    type Output: Clone + Send + Sync + 'static;

    const PANEL: Panel;

    /// Validate raw input. Errors are shown without issuing a request.
    fn prepare(&self, input: &Self::Input) -> Result<Self::Request, ValidationError>;

    /// Issue the request. Called exactly once per accepted submission.
    async fn fetch(
        &self,
        gateway: &dyn LookupGateway,
        request: &Self::Request,
    ) -> Result<Self::Output, GatewayError>;
}

/// Trim and require non-empty text, with the panel's validation copy.
pub(crate) fn require_text(panel: Panel, raw: &str) -> Result<QueryText, ValidationError> {
    QueryText::try_new(raw).ok_or_else(|| ValidationError::empty(panel.validation_message()))
}

/// A request accepted by [`QueryController::begin`], tagged with the
/// generation its completion must match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest<R> {
    generation: u64,
    request: R,
}

impl<R> PendingRequest<R> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request(&self) -> &R {
        &self.request
    }
}

/// Drives one [`QueryState`] through its phases
pub struct QueryController<L: Lookup> {
    lookup: L,
    state: QueryState<L::Input, L::Output>,
    generation: u64,
}

impl<L: Lookup + Default> Default for QueryController<L> {
    fn default() -> Self {
        Self::new(L::default())
    }
}

impl<L: Lookup> QueryController<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            state: QueryState::new(),
            generation: 0,
        }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub fn state(&self) -> &QueryState<L::Input, L::Output> {
        &self.state
    }

    pub fn panel(&self) -> Panel {
        L::PANEL
    }

    /// While true, the panel's trigger control is disabled
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Generation of the most recent submission
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Accept a submission.
    ///
    /// Empty input moves straight to `Error` and returns the validation
    /// error; no request must be issued. Otherwise the state enters
    /// `Loading` and the returned ticket must be executed and handed back to
    /// [`complete`](Self::complete).
    pub fn begin(
        &mut self,
        input: L::Input,
    ) -> Result<PendingRequest<L::Request>, ValidationError> {
        self.generation += 1;
        match self.lookup.prepare(&input) {
            Ok(request) => {
                debug!(
                    panel = %L::PANEL,
                    generation = self.generation,
                    "Dispatching request"
                );
                self.state.start(input);
                Ok(PendingRequest {
                    generation: self.generation,
                    request,
                })
            }
            Err(error) => {
                debug!(panel = %L::PANEL, "Rejected empty input");
                self.state.reject(input, error.message());
                Err(error)
            }
        }
    }

    /// Apply the outcome of a request.
    ///
    /// Returns `false` and leaves the state untouched when the outcome
    /// belongs to a superseded submission.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: Result<L::Output, GatewayError>,
    ) -> bool {
        if generation != self.generation || !self.state.is_loading() {
            debug!(
                panel = %L::PANEL,
                generation,
                current = self.generation,
                "Discarding stale completion"
            );
            return false;
        }

        match outcome {
            Ok(output) => {
                info!(panel = %L::PANEL, generation, "Request succeeded");
                self.state.succeed(output);
            }
            Err(error) => {
                let message = error.user_message(L::PANEL.failure_message());
                warn!(
                    panel = %L::PANEL,
                    generation,
                    "Request failed: {}",
                    truncate_str(&error.to_string(), 200)
                );
                self.state.fail(message);
            }
        }
        true
    }

    /// Submit, fetch and complete inline. Returns the resulting phase.
    pub async fn run(
        &mut self,
        gateway: &dyn LookupGateway,
        input: L::Input,
        progress: &dyn ProgressNotifier,
    ) -> PhaseKind {
        let pending = match self.begin(input) {
            Ok(pending) => pending,
            Err(_) => return self.state.kind(),
        };

        progress.on_request_start(L::PANEL, L::PANEL.loading_label());
        let outcome = self.lookup.fetch(gateway, pending.request()).await;
        self.complete(pending.generation(), outcome);

        let kind = self.state.kind();
        progress.on_request_end(L::PANEL, kind);
        kind
    }
}
