//! Keyword research results.

pub mod entities;
