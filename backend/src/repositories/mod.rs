//! Data access layer
//!
//! User data lives in one document per user behind [`DocumentStore`].

pub mod document;

pub use document::{DocumentStore, InMemoryDocumentStore, PgDocumentStore};
