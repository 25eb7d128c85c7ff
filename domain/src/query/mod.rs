//! Per-panel query state.

pub mod state;
