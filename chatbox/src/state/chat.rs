//! Chat message log and message classification.
//!
//! DESIGN
//! ======
//! The log is append-only for the lifetime of the widget. Messages are never
//! edited or removed, so render keys stay stable and scroll-to-bottom is the
//! only reaction a new entry needs.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Classification tag for a chat message.
///
/// Every message in the log carries exactly one of these kinds; the kind
/// selects both the formatting rule and the display color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Join,
    System,
    Announcement,
    /// Reserved for echoed commands; the parser never produces it.
    Command,
    Money,
    Error,
    Help,
    /// Plain chat text without a command sigil.
    #[default]
    Default,
}

impl MessageKind {
    /// Lowercase tag used in logs and CSS class names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Join => "join",
            MessageKind::System => "system",
            MessageKind::Announcement => "announcement",
            MessageKind::Command => "command",
            MessageKind::Money => "money",
            MessageKind::Error => "error",
            MessageKind::Help => "help",
            MessageKind::Default => "default",
        }
    }

    /// BEM modifier class that colors a message row of this kind.
    #[must_use]
    pub fn css_class(self) -> String {
        format!("game-chat__message--{}", self.as_str())
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rendered chat line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    /// Render key for the keyed log list; unique per message.
    pub id: String,
    pub kind: MessageKind,
    /// Display text, already formatted for `kind`.
    pub text: String,
    /// Creation time in Unix milliseconds.
    pub timestamp: i64,
}

impl ChatMessage {
    pub fn new(kind: MessageKind, text: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            text: text.into(),
            timestamp,
        }
    }
}

/// Greeting lines shown before the player types anything.
const SEED_MESSAGES: &[(MessageKind, &str)] = &[
    (MessageKind::Join, "PlayerOne joined."),
    (MessageKind::System, "You have $500 cash."),
    (MessageKind::Announcement, "Server will restart in 2min!"),
];

/// Ordered, append-only message log for one chat box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    /// Log pre-filled with the greeting lines, all stamped `timestamp`.
    #[must_use]
    pub fn seeded(timestamp: i64) -> Self {
        let messages = SEED_MESSAGES
            .iter()
            .map(|(kind, text)| ChatMessage::new(*kind, *text, timestamp))
            .collect();
        Self { messages }
    }

    /// Append a message at the end of the log.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
