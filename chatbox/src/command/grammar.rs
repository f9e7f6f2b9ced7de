//! Built-in command table and matching patterns.
//!
//! DESIGN
//! ======
//! Two parallel tables: `COMMANDS` drives help text and autocomplete, while
//! `PATTERNS` drives classification. A pattern may group several aliases under
//! one message kind, so the tables do not line up one-to-one.

#[cfg(test)]
#[path = "grammar_test.rs"]
mod grammar_test;

use crate::state::chat::MessageKind;

/// Leading character that marks input as a command.
pub const SIGIL: char = '/';

/// Whitespace as the browser's `String.prototype.trim` and regex `\s` see it.
///
/// Differs from `char::is_whitespace` in two places: U+FEFF counts, U+0085
/// does not.
#[must_use]
pub fn is_chat_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// A user-facing command entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandSpec {
    /// Literal keyword including the sigil, e.g. `/join`.
    pub token: &'static str,
    pub description: &'static str,
    /// Usage hint shown under the token in the suggestion list.
    pub example: &'static str,
}

/// How much input a pattern accepts after its alias.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// The alias must be the whole input.
    Bare,
    /// The alias must be followed by at least one whitespace character; the
    /// rest of the input becomes the command argument.
    Argument,
}

/// Classification rule mapping one or more aliases to a message kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandPattern {
    pub kind: MessageKind,
    pub aliases: &'static [&'static str],
    pub arity: Arity,
}

impl CommandPattern {
    /// Try each alias in order against `input` (ASCII case-insensitive).
    ///
    /// Returns the argument text with the alias and the whitespace after it
    /// removed. Bare patterns return an empty argument.
    #[must_use]
    pub fn strip<'a>(&self, input: &'a str) -> Option<&'a str> {
        self.aliases
            .iter()
            .find_map(|alias| strip_alias(input, alias, self.arity))
    }
}

fn strip_alias<'a>(input: &'a str, alias: &str, arity: Arity) -> Option<&'a str> {
    let head = input.get(..alias.len())?;
    if !head.eq_ignore_ascii_case(alias) {
        return None;
    }
    let rest = &input[alias.len()..];
    match arity {
        Arity::Bare => rest.is_empty().then_some(rest),
        Arity::Argument => {
            let argument = rest.trim_start_matches(is_chat_whitespace);
            (argument.len() < rest.len()).then_some(argument)
        }
    }
}

const COMMANDS: &[CommandSpec] = &[
    CommandSpec { token: "/join", description: "Join message for player", example: "/join <player>" },
    CommandSpec { token: "/money", description: "Show money status", example: "/money <amount>" },
    CommandSpec { token: "/cash", description: "Alternative for money command", example: "/cash <amount>" },
    CommandSpec { token: "/announce", description: "Make an announcement", example: "/announce <message>" },
    CommandSpec { token: "/ann", description: "Short for announce", example: "/ann <message>" },
    CommandSpec { token: "/system", description: "System message", example: "/system <message>" },
    CommandSpec { token: "/sys", description: "Short for system", example: "/sys <message>" },
    CommandSpec { token: "/help", description: "Show all commands", example: "/help" },
];

const PATTERNS: &[CommandPattern] = &[
    CommandPattern { kind: MessageKind::Join, aliases: &["/join"], arity: Arity::Argument },
    CommandPattern { kind: MessageKind::Money, aliases: &["/money", "/cash"], arity: Arity::Argument },
    CommandPattern { kind: MessageKind::Announcement, aliases: &["/announce", "/ann"], arity: Arity::Argument },
    CommandPattern { kind: MessageKind::System, aliases: &["/system", "/sys"], arity: Arity::Argument },
    CommandPattern { kind: MessageKind::Help, aliases: &["/help"], arity: Arity::Bare },
];

/// Immutable command configuration for one chat box.
///
/// Built once when the widget mounts and read on every keystroke and submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandGrammar {
    commands: Vec<CommandSpec>,
    patterns: Vec<CommandPattern>,
}

impl Default for CommandGrammar {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CommandGrammar {
    /// The stock game command set.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(COMMANDS.to_vec(), PATTERNS.to_vec())
    }

    /// Grammar from explicit tables. Both are matched in the given order.
    #[must_use]
    pub fn new(commands: Vec<CommandSpec>, patterns: Vec<CommandPattern>) -> Self {
        Self { commands, patterns }
    }

    #[must_use]
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    #[must_use]
    pub fn patterns(&self) -> &[CommandPattern] {
        &self.patterns
    }

    /// One `"<token> - <description>"` line per command.
    #[must_use]
    pub fn help_text(&self) -> String {
        self.commands
            .iter()
            .map(|cmd| format!("{} - {}", cmd.token, cmd.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
