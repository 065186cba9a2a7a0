//! Remote search service boundary.
//!
//! The session only talks to the service through [`SearchService`], so
//! tests and alternative transports can stand in for
//! [`HttpSearchService`].

mod http;

pub use http::HttpSearchService;

use crate::error::Result;
use crate::models::{CacheStats, PopularQueries, SearchResponse};
use async_trait::async_trait;

/// The four endpoints the controller consumes.
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Candidate completions for a partial query, best first.
    async fn autocomplete(&self, query: &str) -> Result<Vec<String>>;

    /// Submit a search. Only a `"success"` status counts as completed.
    async fn search(&self, query: &str) -> Result<SearchResponse>;

    /// The `limit` most frequent queries in rank order.
    async fn popular(&self, limit: usize) -> Result<PopularQueries>;

    /// Summary of the service-side query cache.
    async fn cache_stats(&self) -> Result<CacheStats>;
}
