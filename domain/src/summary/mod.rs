//! URL summarization results.

pub mod entities;
