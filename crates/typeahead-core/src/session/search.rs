//! Search execution.

use crate::error::TypeaheadError;
use crate::SessionInner;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

/// Message shown when a search fails or is rejected.
const SEARCH_FAILED_MESSAGE: &str = "An error occurred while searching";

/// Why a search request was not sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The query was blank after trimming.
    EmptyQuery,
    /// Another search was still running.
    InFlight,
}

/// Result of [`SearchEvents`](super::SearchEvents) triggering a search.
#[derive(Debug)]
pub enum SearchOutcome {
    /// The service accepted the search; history, counters and panels were
    /// updated.
    Completed,
    /// No request was made.
    Skipped(SkipReason),
    /// The service answered with a status other than success.
    Rejected { status: String },
    /// The request failed in transport or the response did not parse.
    Failed(TypeaheadError),
}

impl SearchOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SearchOutcome::Completed)
    }
}

/// Holds the in-flight flag for the duration of one search.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    /// Set the flag, or return `None` if it is already set.
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl SessionInner {
    /// Run one search for `query`.
    ///
    /// At most one search runs at a time; a call made while another is in
    /// flight is dropped, not queued.
    pub(crate) async fn perform_search(&self, query: &str) -> SearchOutcome {
        let query = query.trim();
        if query.is_empty() {
            return SearchOutcome::Skipped(SkipReason::EmptyQuery);
        }

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            debug!("Search for {:?} dropped: another search is in flight", query);
            return SearchOutcome::Skipped(SkipReason::InFlight);
        };

        debug!("Searching for {:?}", query);
        let response = match self.service.search(query).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Search for {:?} failed: {}", query, e);
                self.notifications.error(SEARCH_FAILED_MESSAGE);
                return SearchOutcome::Failed(e);
            }
        };

        if !response.is_success() {
            warn!(
                "Search for {:?} returned status {:?}",
                query, response.status
            );
            self.notifications.error(SEARCH_FAILED_MESSAGE);
            return SearchOutcome::Rejected {
                status: response.status,
            };
        }

        {
            let mut state = self.state.lock().await;
            state.history.add(query, self.clock.timestamp());
            self.view.render_history(state.history.entries());

            state.counters.record_search(self.clock.today());
            self.view.render_counters(&state.counters);

            self.local.save(&state.history, &state.counters);
        }

        self.refresher.refresh_all().await;

        info!("Search for {:?} completed", query);
        self.notifications
            .success(format!("\"{}\" search complete!", query));
        SearchOutcome::Completed
    }
}
