//! Query state machine data
//!
//! [`QueryState`] is the unit of state per panel. Transitions are plain
//! methods; which transitions are legal, and when a completion is stale, is
//! decided by the controllers in the application layer.

use serde::Serialize;

/// Phase of a query without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Idle,
    Loading,
    Success,
    Error,
}

/// Phase of a query, carrying the result or the error message.
///
/// `Success` and `Error` are the only variants with a payload, so a result
/// and an error message are never present together.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "phase", content = "value", rename_all = "snake_case")]
pub enum QueryPhase<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> QueryPhase<T> {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Self::Idle => PhaseKind::Idle,
            Self::Loading => PhaseKind::Loading,
            Self::Success(_) => PhaseKind::Success,
            Self::Error(_) => PhaseKind::Error,
        }
    }
}

/// State of one panel: the last submitted input and the current phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryState<I, T> {
    input: Option<I>,
    #[serde(flatten)]
    phase: QueryPhase<T>,
}

impl<I, T> Default for QueryState<I, T> {
    fn default() -> Self {
        Self {
            input: None,
            phase: QueryPhase::Idle,
        }
    }
}

impl<I, T> QueryState<I, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The input of the most recent submission, if any
    pub fn input(&self) -> Option<&I> {
        self.input.as_ref()
    }

    pub fn phase(&self) -> &QueryPhase<T> {
        &self.phase
    }

    pub fn kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, QueryPhase::Loading)
    }

    /// The result, present only in `Success`
    pub fn result(&self) -> Option<&T> {
        match &self.phase {
            QueryPhase::Success(result) => Some(result),
            _ => None,
        }
    }

    /// The error message, present only in `Error`
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            QueryPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Record a new submission and enter `Loading`, dropping any prior
    /// result or error.
    pub fn start(&mut self, input: I) {
        self.input = Some(input);
        self.phase = QueryPhase::Loading;
    }

    /// Record a submission that failed validation.
    pub fn reject(&mut self, input: I, message: impl Into<String>) {
        self.input = Some(input);
        self.phase = QueryPhase::Error(message.into());
    }

    pub fn succeed(&mut self, result: T) {
        self.phase = QueryPhase::Success(result);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = QueryPhase::Error(message.into());
    }
}
