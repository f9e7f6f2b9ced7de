//! Slash-command grammar, classification, and formatting.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitted text flows `parse` → `format_message` → `ChatMessage`; typed
//! text flows through `suggest` into the autocomplete dropdown. Everything
//! here is pure and synchronous so the component layer only moves values
//! between signals.

pub mod format;
pub mod grammar;
pub mod parse;
pub mod suggest;


pub use format::format_message;
pub use grammar::{Arity, CommandGrammar, CommandPattern, CommandSpec, SIGIL, is_chat_whitespace};
pub use parse::{ParsedCommand, UNKNOWN_COMMAND_TEXT};

use crate::state::chat::ChatMessage;

impl CommandGrammar {
    /// Parse and format a submission into a log entry stamped `timestamp`.
    #[must_use]
    pub fn compose(&self, input: &str, timestamp: i64) -> ChatMessage {
        let ParsedCommand { kind, text } = self.parse(input);
        ChatMessage::new(kind, format_message(kind, &text), timestamp)
    }
}
