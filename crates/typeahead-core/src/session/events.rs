//! Event entry points invoked by the UI binding.

use super::search::SearchOutcome;
use crate::navigation::Key;
use crate::SearchSession;
use async_trait::async_trait;
use tracing::debug;

/// Everything a UI binding can report to the controller.
///
/// Handlers that end in a search resolve once that search (including its
/// panel refreshes) has finished or was skipped.
#[async_trait]
pub trait SearchEvents: Send + Sync {
    /// The input text changed; schedules a debounced autocomplete fetch.
    async fn on_input_changed(&self, value: String);

    /// A key was pressed while the input had focus.
    async fn on_key_pressed(&self, key: Key);

    /// The submit control was activated: search the input, then clear it.
    async fn on_submit(&self);

    /// A row of the suggestion panel was clicked.
    async fn on_suggestion_picked(&self, index: usize);

    /// An entry of the history panel was clicked.
    async fn on_history_item_picked(&self, index: usize);

    /// An item of the popular panel was clicked.
    async fn on_popular_item_picked(&self, query: String);

    /// The input gained focus; re-fetches suggestions for non-blank input.
    async fn on_focus(&self);

    /// A click landed outside the input and the suggestion panel.
    async fn on_outside_click(&self);
}

impl SearchSession {
    /// Search `query` directly, bypassing the input box.
    pub async fn perform_search(&self, query: &str) -> SearchOutcome {
        self.inner.perform_search(query).await
    }

    /// Fetch suggestions for `query` immediately, without debouncing.
    pub async fn fetch_suggestions(&self, query: &str) {
        self.inner.fetch_suggestions(query).await
    }

    /// Close the suggestion panel.
    pub async fn hide_suggestions(&self) {
        self.inner.hide_suggestions().await
    }

    /// Refresh the popular and cache panels now.
    pub async fn refresh_stats(&self) {
        self.inner.refresher.refresh_all().await
    }

    /// Resolve a 1-based rank of the popular panel and search it.
    ///
    /// Returns `None` if nothing is rendered at that rank.
    pub async fn pick_popular_rank(&self, rank: usize) -> Option<SearchOutcome> {
        let query = self.inner.refresher.query_at_rank(rank).await?;
        Some(self.search_from_panel(query).await)
    }

    /// Put `query` into the input and search it.
    async fn search_from_panel(&self, query: String) -> SearchOutcome {
        {
            let mut state = self.inner.state.lock().await;
            state.input = query.clone();
            self.inner.view.set_input(&query);
        }
        self.inner.perform_search(&query).await
    }
}

#[async_trait]
impl SearchEvents for SearchSession {
    async fn on_input_changed(&self, value: String) {
        self.inner.state.lock().await.input = value.clone();
        self.inner.suggest_debouncer.lock().await.call(value);
    }

    async fn on_key_pressed(&self, key: Key) {
        self.inner.handle_key(key).await;
    }

    async fn on_submit(&self) {
        let query = {
            let mut state = self.inner.state.lock().await;
            let query = std::mem::take(&mut state.input);
            state.suggestions.clear();
            self.inner.view.set_input("");
            self.inner.view.hide_suggestions();
            query
        };
        self.inner.perform_search(&query).await;
    }

    async fn on_suggestion_picked(&self, index: usize) {
        self.inner.pick_suggestion(index).await;
    }

    async fn on_history_item_picked(&self, index: usize) {
        let query = {
            let state = self.inner.state.lock().await;
            state.history.get(index).map(|entry| entry.query.clone())
        };
        match query {
            Some(query) => {
                self.search_from_panel(query).await;
            }
            None => debug!("Ignoring pick of missing history entry {}", index),
        }
    }

    async fn on_popular_item_picked(&self, query: String) {
        self.search_from_panel(query).await;
    }

    async fn on_focus(&self) {
        let input = self.inner.state.lock().await.input.clone();
        if !input.trim().is_empty() {
            self.inner.fetch_suggestions(&input).await;
        }
    }

    async fn on_outside_click(&self) {
        self.inner.hide_suggestions().await;
    }
}
