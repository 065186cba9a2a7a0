//! Centralized configuration for the typeahead controller.
//!
//! Timing, capacity, network and storage constants live here so the rest of
//! the crate never hard-codes them. Runtime overrides go through
//! [`SearchSessionBuilder`](crate::SearchSessionBuilder).

use std::time::Duration;

/// Timers driving the interaction loop.
pub struct TimingConfig;

impl TimingConfig {
    pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);
    pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);
    /// Shorter refresh intervals, including zero, are raised to this.
    pub const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(1);
    pub const NOTIFICATION_DISPLAY: Duration = Duration::from_millis(2000);
    pub const NOTIFICATION_EXIT: Duration = Duration::from_millis(300);
}

/// Search history bounds.
pub struct HistoryConfig;

impl HistoryConfig {
    pub const MAX_ENTRIES: usize = 10;
    /// chrono format for the time-of-day shown next to each entry.
    pub const TIMESTAMP_FORMAT: &'static str = "%-I:%M:%S %p";
}

/// Network-related configuration.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
    pub const POPULAR_LIMIT: usize = 10;
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:8080/api";
    pub const USER_AGENT: &'static str = "typeahead/0.1";
}

/// Keys and formats of the persisted local state.
pub struct StorageConfig;

impl StorageConfig {
    pub const HISTORY_KEY: &'static str = "searchHistory";
    pub const TOTAL_COUNT_KEY: &'static str = "totalSearchCount";
    pub const TODAY_COUNT_KEY: &'static str = "todaySearchCount";
    pub const LAST_DATE_KEY: &'static str = "lastSearchDate";
    /// chrono format of the last-active date, e.g. `Sun Oct 18 2026`.
    pub const DATE_FORMAT: &'static str = "%a %b %d %Y";
    pub const STATE_DIR_NAME: &'static str = "typeahead";
    pub const STATE_FILE_NAME: &'static str = "state.json";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timings_are_reasonable() {
        assert!(TimingConfig::DEBOUNCE_DELAY < TimingConfig::REFRESH_INTERVAL);
        assert!(!TimingConfig::MIN_REFRESH_INTERVAL.is_zero());
        assert!(TimingConfig::NOTIFICATION_EXIT < TimingConfig::NOTIFICATION_DISPLAY);
        assert!(NetworkConfig::REQUEST_TIMEOUT > Duration::ZERO);
    }

    #[test]
    fn test_storage_keys_are_distinct() {
        let keys = [
            StorageConfig::HISTORY_KEY,
            StorageConfig::TOTAL_COUNT_KEY,
            StorageConfig::TODAY_COUNT_KEY,
            StorageConfig::LAST_DATE_KEY,
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
