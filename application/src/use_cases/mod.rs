//! Use cases
//!
//! The controllers that drive each panel's query state.

pub mod encyclopedia;
pub mod query_controller;
pub mod resource_search;
pub mod summarize;

#[cfg(test)]
pub(crate) mod test_support;
