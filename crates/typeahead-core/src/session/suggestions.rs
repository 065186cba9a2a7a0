//! Autocomplete fetching, rendering and keyboard handling.

use super::builder::SuggestionOrdering;
use crate::navigation::{navigate, Key, KeyAction};
use crate::SessionInner;
use std::sync::atomic::Ordering;
use tracing::{debug, warn};

impl SessionInner {
    /// Fetch candidates for `query` and show or hide the panel accordingly.
    ///
    /// A blank query hides the panel without a request. An empty result or
    /// a failed request also hides it.
    pub(crate) async fn fetch_suggestions(&self, query: &str) {
        let seq = self.suggestion_issued.fetch_add(1, Ordering::AcqRel) + 1;

        if query.trim().is_empty() {
            self.mark_applied(seq);
            self.hide_suggestions().await;
            return;
        }

        let result = self.service.autocomplete(query).await;

        if self.ordering == SuggestionOrdering::LatestRequestWins && !self.mark_applied(seq) {
            debug!("Dropping stale suggestions for {:?} (request #{})", query, seq);
            return;
        }

        match result {
            Ok(suggestions) if !suggestions.is_empty() => {
                debug!("{} suggestions for {:?}", suggestions.len(), query);
                self.display_suggestions(suggestions).await;
            }
            Ok(_) => self.hide_suggestions().await,
            Err(e) => {
                warn!("Failed to fetch suggestions for {:?}: {}", query, e);
                self.hide_suggestions().await;
            }
        }
    }

    /// Record `seq` as applied. Returns false if a newer request already was.
    fn mark_applied(&self, seq: u64) -> bool {
        self.suggestion_applied.fetch_max(seq, Ordering::AcqRel) < seq
    }

    /// Replace the rendered list with `suggestions`, nothing highlighted.
    pub(crate) async fn display_suggestions(&self, suggestions: Vec<String>) {
        let mut state = self.state.lock().await;
        self.view.show_suggestions(&suggestions);
        state.suggestions.replace(suggestions);
    }

    /// Close the list and clear the highlight. Idempotent.
    pub(crate) async fn hide_suggestions(&self) {
        let mut state = self.state.lock().await;
        state.suggestions.clear();
        self.view.hide_suggestions();
    }

    /// Apply a key press to the suggestion list.
    pub(crate) async fn handle_key(&self, key: Key) {
        let action = {
            let mut state = self.state.lock().await;
            let input = state.input.clone();
            let action = navigate(&mut state.suggestions, key, &input);

            match &action {
                KeyAction::Preview { index, text } => {
                    state.input = text.clone();
                    self.view.highlight_suggestion(Some(*index));
                    self.view.set_input(text);
                }
                KeyAction::Select(text) => {
                    state.input = text.clone();
                    self.view.set_input(text);
                    self.view.hide_suggestions();
                }
                KeyAction::Dismiss => self.view.hide_suggestions(),
                KeyAction::Submit(_) | KeyAction::Ignored => {}
            }
            action
        };

        match action {
            KeyAction::Select(query) | KeyAction::Submit(query) => {
                self.perform_search(&query).await;
            }
            KeyAction::Preview { .. } | KeyAction::Dismiss | KeyAction::Ignored => {}
        }
    }

    /// Adopt the suggestion at `index` as the input and search it.
    pub(crate) async fn pick_suggestion(&self, index: usize) {
        let picked = {
            let mut state = self.state.lock().await;
            let Some(text) = state.suggestions.get(index).map(str::to_string) else {
                debug!("Ignoring pick of missing suggestion {}", index);
                return;
            };
            state.input = text.clone();
            state.suggestions.clear();
            self.view.set_input(&text);
            self.view.hide_suggestions();
            text
        };

        self.perform_search(&picked).await;
    }
}
