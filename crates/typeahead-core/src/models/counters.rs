//! Aggregate search counters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Total and per-day search counts.
///
/// `today` only counts searches made on `last_active_date`; any other date
/// means the per-day count starts over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCounters {
    pub total: u64,
    pub today: u64,
    pub last_active_date: Option<NaiveDate>,
}

impl SearchCounters {
    /// Reset the per-day count if `today` is a different calendar date.
    ///
    /// Returns true when a rollover happened.
    pub fn roll_over(&mut self, today: NaiveDate) -> bool {
        if self.last_active_date == Some(today) {
            return false;
        }
        self.today = 0;
        self.last_active_date = Some(today);
        true
    }

    /// Count one completed search made on `today`.
    pub fn record_search(&mut self, today: NaiveDate) {
        self.roll_over(today);
        self.total = self.total.saturating_add(1);
        self.today = self.today.saturating_add(1);
    }
}
