//! Persisted search history records.

use serde::{Deserialize, Serialize};

/// One past search, as shown in the history panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    /// Trimmed, non-empty query text.
    pub query: String,
    /// Local time of day the search completed.
    pub timestamp: String,
}

impl SearchHistoryEntry {
    pub fn new(query: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            timestamp: timestamp.into(),
        }
    }
}
