//! Session state, startup and read accessors.

use crate::history::SearchHistory;
use crate::models::{RankedQuery, SearchCounters};
use crate::navigation::SuggestionSet;
use crate::refresh::PollingHandle;
use crate::SearchSession;
use std::sync::atomic::Ordering;
use tracing::info;

/// Mutable per-session state.
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    pub history: SearchHistory,
    pub counters: SearchCounters,
    pub suggestions: SuggestionSet,
    /// Mirror of the search input's current text.
    pub input: String,
}

impl SearchSession {
    /// Restore persisted state, draw the initial panels and start polling.
    ///
    /// Keep the returned handle alive for as long as the session should
    /// refresh its statistics.
    pub async fn start(&self) -> PollingHandle {
        let inner = &self.inner;
        let loaded = inner.local.load();

        {
            let mut state = inner.state.lock().await;
            state.history = loaded.history;
            state.counters = loaded.counters;
            inner.view.render_counters(&state.counters);
            inner.view.render_history(state.history.entries());
            info!(
                "Session started with {} history entries, total={}, today={}",
                state.history.len(),
                state.counters.total,
                state.counters.today
            );
        }

        if loaded.history_error.is_some() {
            inner
                .notifications
                .error("Saved search history could not be read and was reset");
        }

        inner.refresher.refresh_all().await;
        inner.refresher.spawn_polling(inner.refresh_interval)
    }

    /// Snapshot of the search history.
    pub async fn history(&self) -> SearchHistory {
        self.inner.state.lock().await.history.clone()
    }

    /// Snapshot of the counters.
    pub async fn counters(&self) -> SearchCounters {
        self.inner.state.lock().await.counters.clone()
    }

    /// Snapshot of the rendered suggestions.
    pub async fn suggestions(&self) -> SuggestionSet {
        self.inner.state.lock().await.suggestions.clone()
    }

    /// Current text of the search input.
    pub async fn input(&self) -> String {
        self.inner.state.lock().await.input.clone()
    }

    /// The most recently rendered popular-query ranking.
    pub async fn popular(&self) -> Vec<RankedQuery> {
        self.inner.refresher.popular().await
    }

    /// Whether a search is running right now.
    pub fn is_searching(&self) -> bool {
        self.inner.in_flight.load(Ordering::Acquire)
    }
}
