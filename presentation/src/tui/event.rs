//! TUI event types
//!
//! Request tasks spawned by the event loop report back through these events.
//! Each completion carries the generation its request was issued with.

use hub_application::{GatewayError, WikiOutcome};
use hub_domain::{ResourceSearchResult, ServiceHealth, SummaryResult};

/// Events sent from request tasks to the TUI event loop
#[derive(Debug, Clone)]
pub enum TuiEvent {
    Summarize {
        generation: u64,
        outcome: Result<SummaryResult, GatewayError>,
    },
    Resources {
        generation: u64,
        outcome: Result<ResourceSearchResult, GatewayError>,
    },
    Wiki {
        generation: u64,
        outcome: WikiOutcome,
    },
    Health(Result<ServiceHealth, GatewayError>),
}
