//! Suggestion list state and keyboard navigation over it.
//!
//! [`navigate`] is a pure transition function: it updates the highlight of
//! a [`SuggestionSet`] and tells the caller what to do with the input box.

use serde::{Deserialize, Serialize};

/// Keys the navigator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Down,
    Up,
    Enter,
    Escape,
    /// Any other key; never handled.
    Other,
}

/// What the session should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Nothing to do.
    Ignored,
    /// Show the highlighted suggestion in the input without searching.
    Preview { index: usize, text: String },
    /// Adopt the suggestion as the input, close the list and search it.
    Select(String),
    /// Search the raw input value as typed.
    Submit(String),
    /// Close the list without searching.
    Dismiss,
}

/// Rendered autocomplete candidates and the highlighted row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionSet {
    items: Vec<String>,
    highlighted: Option<usize>,
}

impl SuggestionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the candidates wholesale and clear the highlight.
    pub fn replace(&mut self, items: Vec<String>) {
        self.items = items;
        self.highlighted = None;
    }

    /// Empty the list and clear the highlight.
    pub fn clear(&mut self) {
        self.items.clear();
        self.highlighted = None;
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the list is showing.
    pub fn is_open(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted_text(&self) -> Option<&str> {
        self.highlighted.and_then(|i| self.get(i))
    }

    /// Move the highlight down, wrapping from the last row to the first.
    pub fn move_down(&mut self) -> Option<usize> {
        let n = self.items.len();
        if n == 0 {
            return None;
        }
        let next = match self.highlighted {
            Some(i) => (i + 1) % n,
            None => 0,
        };
        self.highlighted = Some(next);
        self.highlighted
    }

    /// Move the highlight up, wrapping from the first row to the last.
    pub fn move_up(&mut self) -> Option<usize> {
        let n = self.items.len();
        if n == 0 {
            return None;
        }
        let next = match self.highlighted {
            None | Some(0) => n - 1,
            Some(i) => i - 1,
        };
        self.highlighted = Some(next);
        self.highlighted
    }
}

/// Apply `key` to the suggestion list.
///
/// Every key is ignored while no suggestions are rendered.
pub fn navigate(set: &mut SuggestionSet, key: Key, raw_input: &str) -> KeyAction {
    if set.is_empty() {
        return KeyAction::Ignored;
    }

    match key {
        Key::Down | Key::Up => {
            let moved = if key == Key::Down {
                set.move_down()
            } else {
                set.move_up()
            };
            match moved.and_then(|i| set.get(i).map(|text| (i, text.to_string()))) {
                Some((index, text)) => KeyAction::Preview { index, text },
                None => KeyAction::Ignored,
            }
        }
        Key::Enter => match set.highlighted_text() {
            Some(text) => {
                let text = text.to_string();
                set.clear();
                KeyAction::Select(text)
            }
            None => KeyAction::Submit(raw_input.to_string()),
        },
        Key::Escape => {
            set.clear();
            KeyAction::Dismiss
        }
        Key::Other => KeyAction::Ignored,
    }
}
