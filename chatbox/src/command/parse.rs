//! Classify submitted text against the command grammar.

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;

use super::grammar::{CommandGrammar, SIGIL};
use crate::state::chat::MessageKind;

/// Notice shown when the input starts with the sigil but matches no pattern.
pub const UNKNOWN_COMMAND_TEXT: &str = "Unknown command. Type /help for available commands.";

/// Result of classifying one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedCommand {
    pub kind: MessageKind,
    /// Argument text for commands, the whole input for plain chat.
    pub text: String,
}

impl CommandGrammar {
    /// Classify trimmed, non-empty input.
    ///
    /// The help token is checked first and expands to the full command
    /// listing. Remaining patterns are tried in declared order and the first
    /// match wins.
    #[must_use]
    pub fn parse(&self, input: &str) -> ParsedCommand {
        let help = self.patterns().iter().find(|p| p.kind == MessageKind::Help);
        if help.is_some_and(|p| p.strip(input).is_some()) {
            return ParsedCommand { kind: MessageKind::Help, text: self.help_text() };
        }

        for pattern in self.patterns().iter().filter(|p| p.kind != MessageKind::Help) {
            if let Some(argument) = pattern.strip(input) {
                return ParsedCommand { kind: pattern.kind, text: argument.to_owned() };
            }
        }

        if input.starts_with(SIGIL) {
            return ParsedCommand { kind: MessageKind::Error, text: UNKNOWN_COMMAND_TEXT.to_owned() };
        }

        ParsedCommand { kind: MessageKind::Default, text: input.to_owned() }
    }
}
