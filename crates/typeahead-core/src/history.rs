//! Bounded, deduplicated, most-recent-first search history.

use crate::config::HistoryConfig;
use crate::models::SearchHistoryEntry;
use std::collections::HashSet;

/// Placeholder the history panel shows when there is nothing to list.
pub const EMPTY_HISTORY_MESSAGE: &str = "No recent searches";

/// Search history log.
///
/// Invariants: newest entry first, no two entries with the same query
/// (exact, case-sensitive match), at most `capacity` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistory {
    entries: Vec<SearchHistoryEntry>,
    capacity: usize,
}

impl SearchHistory {
    /// Create an empty history with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(HistoryConfig::MAX_ENTRIES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuild a history from stored entries, restoring the invariants.
    ///
    /// Blank queries are dropped, later duplicates lose to earlier (newer)
    /// ones, and the result is truncated to capacity.
    pub fn from_entries(entries: impl IntoIterator<Item = SearchHistoryEntry>) -> Self {
        let mut history = Self::new();
        let mut seen = HashSet::new();
        for mut entry in entries {
            let trimmed = entry.query.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.len() != entry.query.len() {
                entry.query = trimmed.to_string();
            }
            if !seen.insert(entry.query.clone()) {
                continue;
            }
            history.entries.push(entry);
            if history.entries.len() == history.capacity {
                break;
            }
        }
        history
    }

    /// Record `query` as the most recent search.
    ///
    /// Any existing entry with the same query is removed first, so repeating
    /// a search moves it to the front without growing the log.
    pub fn add(&mut self, query: &str, timestamp: impl Into<String>) {
        self.entries.retain(|entry| entry.query != query);
        self.entries
            .insert(0, SearchHistoryEntry::new(query, timestamp));
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> &[SearchHistoryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&SearchHistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new()
    }
}
