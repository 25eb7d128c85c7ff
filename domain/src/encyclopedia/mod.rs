//! Encyclopedia lookup with server-driven disambiguation.
//!
//! A phase-1 search answers with either a [`WikiArticle`] or a
//! [`Disambiguation`] listing candidate terms. Picking a candidate issues a
//! phase-2 forced lookup that always answers with an article.

pub mod entities;
pub mod language;
