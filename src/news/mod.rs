//! News search service integration module.
//!
//! Provides the client, models and request encoding for the remote
//! `/search` and `/latest` endpoints.

pub mod client;
pub mod error;
pub mod models;
pub mod query;

pub use client::NewsClient;
pub use error::NewsError;
pub use models::Article;
pub use query::{DateRange, Endpoint, SearchFilters};
