//! Progress notification port
//!
//! Lets a front end show that a panel is waiting on the service.

use hub_domain::{Panel, PhaseKind};

/// Callback for request lifecycle updates
///
/// Implementations live in the presentation layer (spinner for one-shot
/// commands). The terminal screen renders `Loading` from state instead.
pub trait ProgressNotifier: Send + Sync {
    /// Called when a request is dispatched; `label` is the panel's loading copy
    fn on_request_start(&self, panel: Panel, label: &str);

    /// Called when the panel leaves `Loading`
    fn on_request_end(&self, panel: Panel, outcome: PhaseKind);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_request_start(&self, _panel: Panel, _label: &str) {}
    fn on_request_end(&self, _panel: Panel, _outcome: PhaseKind) {}
}
