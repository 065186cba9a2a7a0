//! Persisted history, counters and last-active date.
//!
//! Four logical fields are stored as strings under the keys in
//! [`StorageConfig`]. They are always written together so a later load never
//! observes a mix of old and new values.

use super::KeyValueStore;
use crate::clock::Clock;
use crate::config::StorageConfig;
use crate::history::SearchHistory;
use crate::models::{SearchCounters, SearchHistoryEntry};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, warn};

/// Everything restored from local storage at startup.
#[derive(Debug, Clone, Default)]
pub struct LoadedState {
    pub history: SearchHistory,
    pub counters: SearchCounters,
    /// Set when the stored history could not be parsed and was discarded.
    pub history_error: Option<String>,
}

/// Adapter between the session and a [`KeyValueStore`].
///
/// Storage failures never escape: they are logged and the operation
/// becomes a no-op.
#[derive(Clone)]
pub struct LocalStore {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl LocalStore {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Restore history and counters.
    ///
    /// If the stored last-active date is not today, the per-day count
    /// starts at zero and both today's date and the zeroed count are written
    /// back right away.
    pub fn load(&self) -> LoadedState {
        let today = self.clock.today();

        let stored_date = self
            .read(StorageConfig::LAST_DATE_KEY)
            .and_then(|raw| parse_date(&raw));

        let today_count = if stored_date == Some(today) {
            self.read_count(StorageConfig::TODAY_COUNT_KEY)
        } else {
            debug!(
                "Last active date {:?} differs from {}, resetting today's count",
                stored_date, today
            );
            let reset = [
                (StorageConfig::LAST_DATE_KEY, format_date(today)),
                (StorageConfig::TODAY_COUNT_KEY, "0".to_string()),
            ];
            if let Err(e) = self.store.set_many(&reset) {
                warn!("Failed to persist day rollover: {}", e);
            }
            0
        };

        let total = self.read_count(StorageConfig::TOTAL_COUNT_KEY);

        let (history, history_error) = match self.read(StorageConfig::HISTORY_KEY) {
            None => (SearchHistory::new(), None),
            Some(raw) => match serde_json::from_str::<Vec<SearchHistoryEntry>>(&raw) {
                Ok(entries) => (SearchHistory::from_entries(entries), None),
                Err(e) => {
                    warn!("Discarding malformed stored search history: {}", e);
                    (SearchHistory::new(), Some(e.to_string()))
                }
            },
        };

        LoadedState {
            history,
            counters: SearchCounters {
                total,
                today: today_count,
                last_active_date: Some(today),
            },
            history_error,
        }
    }

    /// Persist history and counters as one write, stamped with today's date.
    pub fn save(&self, history: &SearchHistory, counters: &SearchCounters) {
        let serialized = match serde_json::to_string(history.entries()) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize search history: {}", e);
                return;
            }
        };

        let entries = [
            (StorageConfig::HISTORY_KEY, serialized),
            (StorageConfig::TOTAL_COUNT_KEY, counters.total.to_string()),
            (StorageConfig::TODAY_COUNT_KEY, counters.today.to_string()),
            (StorageConfig::LAST_DATE_KEY, format_date(self.clock.today())),
        ];

        match self.store.set_many(&entries) {
            Ok(()) => debug!(
                "Saved {} history entries, total={}, today={}",
                history.len(),
                counters.total,
                counters.today
            ),
            Err(e) => warn!("Failed to save search state: {}", e),
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read {} from storage: {}", key, e);
                None
            }
        }
    }

    fn read_count(&self, key: &str) -> u64 {
        let Some(raw) = self.read(key) else {
            return 0;
        };
        raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring malformed {} value {:?}", key, raw);
            0
        })
    }
}

/// Render a date the way it is persisted, e.g. `Sun Oct 18 2026`.
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(StorageConfig::DATE_FORMAT).to_string()
}

pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), StorageConfig::DATE_FORMAT).ok()
}
