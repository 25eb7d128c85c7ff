//! Application layer for research-hub
//!
//! This crate contains the query controllers that drive each panel and the
//! port definitions they depend on. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    lookup_gateway::{GatewayError, LookupGateway},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::encyclopedia::{
    EncyclopediaController, EncyclopediaPhase, ForceError, WikiOutcome, WikiRequest,
    WikiRequestKind,
};
pub use use_cases::query_controller::{Lookup, PendingRequest, QueryController};
pub use use_cases::resource_search::{ResourceController, ResourceLookup, ResourceView};
pub use use_cases::summarize::{SummarizeController, SummarizeLookup};
