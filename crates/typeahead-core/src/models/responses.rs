//! Request and response payloads of the remote search service.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Status value the service returns for an accepted search.
pub const SEARCH_SUCCESS_STATUS: &str = "success";

/// Body of `POST search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// Response of `POST search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub status: String,
}

impl SearchResponse {
    pub fn is_success(&self) -> bool {
        self.status == SEARCH_SUCCESS_STATUS
    }
}

/// Response of `GET stats/cache`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Number of distinct queries the service has cached.
    #[serde(default)]
    pub cached_queries: u64,
    /// Set when the service could not compute the statistics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A popular query and how often it was searched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularQuery {
    pub query: String,
    pub count: u64,
}

/// A popular query with its 1-based position in the ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedQuery {
    pub rank: usize,
    pub query: String,
    pub count: u64,
}

/// Response of `GET popular`.
///
/// The service answers with a JSON object `{query: count, ...}` whose key
/// order is the ranking, so it is decoded into a `Vec` in document order
/// rather than into a map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopularQueries(pub Vec<PopularQuery>);

impl PopularQueries {
    /// Attach 1-based ranks in response order.
    pub fn ranked(&self) -> Vec<RankedQuery> {
        self.0
            .iter()
            .enumerate()
            .map(|(i, p)| RankedQuery {
                rank: i + 1,
                query: p.query.clone(),
                count: p.count,
            })
            .collect()
    }
}

impl<'de> Deserialize<'de> for PopularQueries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = PopularQueries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping query text to a count")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut queries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((query, count)) = map.next_entry::<String, u64>()? {
                    queries.push(PopularQuery { query, count });
                }
                Ok(PopularQueries(queries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}
