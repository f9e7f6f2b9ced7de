//! Chat input line and autocomplete navigation state.
//!
//! DESIGN
//! ======
//! Every keyboard or pointer event maps to exactly one method here. The
//! component owns this record through an `RwSignal` and never mutates fields
//! directly, so each transition can be exercised without a browser.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::command::{CommandGrammar, CommandSpec, SIGIL, is_chat_whitespace};

/// Keys the chat input intercepts while suggestions are showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatKey {
    ArrowUp,
    ArrowDown,
    Tab,
}

impl ChatKey {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "Tab" => Some(Self::Tab),
            _ => None,
        }
    }
}

/// Text being typed plus dropdown visibility and highlight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatInputState {
    pub input: String,
    /// True whenever `input` starts with the command sigil.
    pub suggestions_visible: bool,
    /// Highlighted row in the current suggestion list.
    pub selected_suggestion: usize,
}

impl ChatInputState {
    /// Replace the input text, as on every `input` event.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.suggestions_visible = self.input.starts_with(SIGIL);
        self.selected_suggestion = 0;
    }

    /// Suggestions for the current input.
    #[must_use]
    pub fn suggestions(&self, grammar: &CommandGrammar) -> Vec<CommandSpec> {
        grammar.suggest(&self.input)
    }

    /// Whether the dropdown has anything to show.
    #[must_use]
    pub fn dropdown_open(&self, grammar: &CommandGrammar) -> bool {
        self.suggestions_visible && !self.suggestions(grammar).is_empty()
    }

    /// Apply a navigation or completion key.
    ///
    /// Returns `true` when the key was consumed and the browser default
    /// should be suppressed. Keys are ignored while the dropdown is closed.
    pub fn handle_key(&mut self, key: ChatKey, grammar: &CommandGrammar) -> bool {
        if !self.suggestions_visible {
            return false;
        }
        let suggestions = self.suggestions(grammar);
        if suggestions.is_empty() {
            return false;
        }

        match key {
            ChatKey::ArrowUp => self.select_previous(suggestions.len()),
            ChatKey::ArrowDown => self.select_next(suggestions.len()),
            ChatKey::Tab => {
                let index = self.selected_suggestion.min(suggestions.len() - 1);
                self.complete(&suggestions[index]);
            }
        }
        true
    }

    /// Move the highlight up one row, wrapping to the last row.
    pub fn select_previous(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let current = self.selected_suggestion.min(count - 1);
        self.selected_suggestion = (current + count - 1) % count;
    }

    /// Move the highlight down one row, wrapping to the first row.
    pub fn select_next(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let current = self.selected_suggestion.min(count - 1);
        self.selected_suggestion = (current + 1) % count;
    }

    /// Fill the input with `spec`'s token and a trailing space.
    pub fn complete(&mut self, spec: &CommandSpec) {
        self.set_input(format!("{} ", spec.token));
    }

    /// Take the trimmed input for submission and reset the line.
    ///
    /// Blank input is left untouched and yields `None`.
    pub fn take_submission(&mut self) -> Option<String> {
        let trimmed = self.input.trim_matches(is_chat_whitespace);
        if trimmed.is_empty() {
            return None;
        }
        let submitted = trimmed.to_owned();
        self.input.clear();
        self.suggestions_visible = false;
        self.selected_suggestion = 0;
        Some(submitted)
    }
}
