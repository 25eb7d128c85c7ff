//! Domain layer for research-hub
//!
//! This crate contains the value objects, result shapes and query state shared
//! by every lookup panel. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Panels
//!
//! A [`Panel`] is one independently operating lookup capability:
//!
//! - **Summarize**: URL → summary + citations, with fallback provenance
//! - **Encyclopedia**: term → article, or a list of candidates to disambiguate
//! - **Resources**: keywords → ranked list of resources tagged with `via`
//!
//! ## Query State
//!
//! Every panel owns a [`QueryState`] that moves through
//! `Idle → Loading → Success | Error`. The payload lives inside the
//! [`QueryPhase`] variant, so a result and an error message can never be
//! present at the same time.

pub mod config;
pub mod core;
pub mod encyclopedia;
pub mod panel;
pub mod query;
pub mod resource;
pub mod summary;
pub mod util;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::ValidationError, health::ServiceHealth, query_text::QueryText};
pub use encyclopedia::{
    entities::{Disambiguation, EncyclopediaResult, WikiArticle},
    language::Language,
};
pub use panel::Panel;
pub use query::state::{PhaseKind, QueryPhase, QueryState};
pub use resource::entities::{ResourceItem, ResourceSearchResult};
pub use summary::entities::{Citation, CitationMetadata, SummaryResult};
