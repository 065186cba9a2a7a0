//! Rendering surface implemented by the UI binding.
//!
//! The session never touches widgets directly; it describes what should be
//! on screen through [`SearchView`]. Implementations are expected to return
//! quickly and must not call back into the session synchronously.

use crate::models::{Notification, NotificationId, RankedQuery, SearchCounters, SearchHistoryEntry};

/// Everything the controller can ask the UI to display.
pub trait SearchView: Send + Sync {
    /// Replace the text of the search input.
    fn set_input(&self, value: &str);

    /// Open the suggestion panel with `suggestions`, nothing highlighted.
    fn show_suggestions(&self, suggestions: &[String]);

    /// Move the highlight in the open suggestion panel.
    fn highlight_suggestion(&self, index: Option<usize>);

    /// Close the suggestion panel.
    fn hide_suggestions(&self);

    /// Redraw the history panel. An empty slice means the placeholder
    /// [`EMPTY_HISTORY_MESSAGE`](crate::history::EMPTY_HISTORY_MESSAGE).
    fn render_history(&self, entries: &[SearchHistoryEntry]);

    /// Redraw the total/today counters.
    fn render_counters(&self, counters: &SearchCounters);

    /// Redraw the popular-queries panel in rank order.
    fn render_popular(&self, ranked: &[RankedQuery]);

    /// Redraw the cached-queries figure.
    fn render_cached_queries(&self, count: u64);

    /// Add a toast.
    fn show_notification(&self, notification: &Notification);

    /// Start the exit transition of a toast.
    fn notification_leaving(&self, _id: NotificationId) {}

    /// Remove a toast. Must tolerate ids that are already gone.
    fn remove_notification(&self, id: NotificationId);
}

/// A view that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl SearchView for NullView {
    fn set_input(&self, _value: &str) {}
    fn show_suggestions(&self, _suggestions: &[String]) {}
    fn highlight_suggestion(&self, _index: Option<usize>) {}
    fn hide_suggestions(&self) {}
    fn render_history(&self, _entries: &[SearchHistoryEntry]) {}
    fn render_counters(&self, _counters: &SearchCounters) {}
    fn render_popular(&self, _ranked: &[RankedQuery]) {}
    fn render_cached_queries(&self, _count: u64) {}
    fn show_notification(&self, _notification: &Notification) {}
    fn remove_notification(&self, _id: NotificationId) {}
}
