//! Autocomplete candidates for partially typed commands.

#[cfg(test)]
#[path = "suggest_test.rs"]
mod suggest_test;

use super::grammar::{CommandGrammar, CommandSpec, SIGIL};

impl CommandGrammar {
    /// Commands matching the current input, in table order.
    ///
    /// An entry matches when its token starts with `input`, or its description
    /// contains `input` minus the sigil; both comparisons ignore case. Input
    /// without the sigil yields nothing.
    #[must_use]
    pub fn suggest(&self, input: &str) -> Vec<CommandSpec> {
        let Some(remainder) = input.strip_prefix(SIGIL) else {
            return Vec::new();
        };
        let prefix = input.to_lowercase();
        let remainder = remainder.to_lowercase();

        self.commands()
            .iter()
            .filter(|cmd| {
                cmd.token.to_lowercase().starts_with(&prefix) || cmd.description.to_lowercase().contains(&remainder)
            })
            .copied()
            .collect()
    }
}
