//! Display text per message kind.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::state::chat::MessageKind;

/// Render parsed command text for display in the log.
///
/// The argument is not validated; `/money lots` renders as
/// `You have $lots in your account.`
#[must_use]
pub fn format_message(kind: MessageKind, text: &str) -> String {
    match kind {
        MessageKind::Join => format!("{text} joined."),
        MessageKind::Money => format!("You have ${text} in your account."),
        MessageKind::Announcement => format!("Announcement: {text}"),
        MessageKind::System => format!("System: {text}"),
        MessageKind::Help | MessageKind::Command | MessageKind::Error | MessageKind::Default => text.to_owned(),
    }
}
