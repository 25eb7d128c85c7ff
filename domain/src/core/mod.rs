//! Core domain concepts shared across all panels.
//!
//! - [`query_text::QueryText`]: a validated, trimmed, non-empty query string
//! - [`error::ValidationError`]: input rejected before any network call
//! - [`health::ServiceHealth`]: liveness report of the lookup service

pub mod error;
pub mod health;
pub mod query_text;
