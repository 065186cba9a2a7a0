//! A [`SearchView`] that prints to stdout.

use std::io::{self, Write};
use std::sync::Mutex;
use typeahead_core::{
    Notification, NotificationId, NotificationKind, RankedQuery, SearchCounters,
    SearchHistoryEntry, SearchView, EMPTY_HISTORY_MESSAGE,
};

/// Prints every view update as a few plain lines.
///
/// The suggestion list is kept so a highlight change can redraw it.
#[derive(Debug, Default)]
pub struct TerminalView {
    suggestions: Mutex<Vec<String>>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    fn print(&self, text: &str) {
        let mut out = io::stdout().lock();
        // A closed stdout is ignored.
        let _ = writeln!(out, "{}", text);
    }

    fn draw_suggestions(&self, highlighted: Option<usize>) {
        let suggestions = match self.suggestions.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        self.print(&format_suggestions(&suggestions, highlighted));
    }

    fn set_suggestions(&self, items: Vec<String>) {
        match self.suggestions.lock() {
            Ok(mut guard) => *guard = items,
            Err(poisoned) => *poisoned.into_inner() = items,
        }
    }
}

impl SearchView for TerminalView {
    fn set_input(&self, value: &str) {
        self.print(&format!("input: {:?}", value));
    }

    fn show_suggestions(&self, suggestions: &[String]) {
        self.set_suggestions(suggestions.to_vec());
        self.draw_suggestions(None);
    }

    fn highlight_suggestion(&self, index: Option<usize>) {
        self.draw_suggestions(index);
    }

    fn hide_suggestions(&self) {
        self.set_suggestions(Vec::new());
    }

    fn render_history(&self, entries: &[SearchHistoryEntry]) {
        self.print(&format_history(entries));
    }

    fn render_counters(&self, counters: &SearchCounters) {
        self.print(&format!(
            "searches: {} total, {} today",
            counters.total, counters.today
        ));
    }

    fn render_popular(&self, ranked: &[RankedQuery]) {
        self.print(&format_popular(ranked));
    }

    fn render_cached_queries(&self, count: u64) {
        self.print(&format!("cached queries: {}", count));
    }

    fn show_notification(&self, notification: &Notification) {
        let marker = match notification.kind {
            NotificationKind::Success => "ok",
            NotificationKind::Error => "!!",
        };
        self.print(&format!("[{}] {}", marker, notification.message));
    }

    fn remove_notification(&self, _id: NotificationId) {}
}

fn format_suggestions(items: &[String], highlighted: Option<usize>) -> String {
    let mut out = String::from("suggestions:");
    for (i, item) in items.iter().enumerate() {
        let marker = if highlighted == Some(i) { '>' } else { ' ' };
        out.push_str(&format!("\n {} {}. {}", marker, i + 1, item));
    }
    out
}

fn format_history(entries: &[SearchHistoryEntry]) -> String {
    if entries.is_empty() {
        return format!("history: {}", EMPTY_HISTORY_MESSAGE);
    }
    let mut out = String::from("history:");
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!("\n   {}. {} ({})", i + 1, entry.query, entry.timestamp));
    }
    out
}

fn format_popular(ranked: &[RankedQuery]) -> String {
    let mut out = String::from("popular:");
    for item in ranked {
        out.push_str(&format!("\n   #{} {} ({})", item.rank, item.query, item.count));
    }
    out
}
