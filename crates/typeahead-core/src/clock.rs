//! Wall-clock access for date rollover and history timestamps.

use crate::config::HistoryConfig;
use chrono::{Local, NaiveDate, NaiveTime};

/// Source of the current calendar date and time of day.
pub trait Clock: Send + Sync {
    /// Current local calendar date.
    fn today(&self) -> NaiveDate;

    /// Current local time of day.
    fn now_time(&self) -> NaiveTime;

    /// Time of day rendered for a history entry.
    fn timestamp(&self) -> String {
        self.now_time()
            .format(HistoryConfig::TIMESTAMP_FORMAT)
            .to_string()
    }
}

/// The machine's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_time(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// A clock pinned to a fixed instant. The date can be moved forward to
/// simulate a day rollover.
#[derive(Debug)]
pub struct FixedClock {
    date: std::sync::RwLock<NaiveDate>,
    time: NaiveTime,
}

impl FixedClock {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date: std::sync::RwLock::new(date),
            time,
        }
    }

    /// Pin the clock to noon on the given date.
    pub fn on(date: NaiveDate) -> Self {
        Self::new(date, NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default())
    }

    /// Move the pinned date.
    pub fn set_today(&self, date: NaiveDate) {
        match self.date.write() {
            Ok(mut guard) => *guard = date,
            Err(poisoned) => *poisoned.into_inner() = date,
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        match self.date.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    fn now_time(&self) -> NaiveTime {
        self.time
    }
}
