use super::*;

fn parse(input: &str) -> ParsedCommand {
    CommandGrammar::builtin().parse(input)
}

// =============================================================
// Command patterns
// =============================================================

#[test]
fn parse_join_extracts_player() {
    assert_eq!(parse("/join Alice"), ParsedCommand { kind: MessageKind::Join, text: "Alice".into() });
}

#[test]
fn parse_money_and_cash_are_aliases() {
    assert_eq!(parse("/money 50"), ParsedCommand { kind: MessageKind::Money, text: "50".into() });
    assert_eq!(parse("/cash 50"), ParsedCommand { kind: MessageKind::Money, text: "50".into() });
}

#[test]
fn parse_announce_and_ann_are_aliases() {
    assert_eq!(parse("/announce Raid at dawn").kind, MessageKind::Announcement);
    assert_eq!(parse("/ann Raid at dawn").text, "Raid at dawn");
}

#[test]
fn parse_system_and_sys_are_aliases() {
    assert_eq!(parse("/system maintenance").kind, MessageKind::System);
    assert_eq!(parse("/sys maintenance").text, "maintenance");
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!(parse("/JOIN Alice").kind, MessageKind::Join);
    assert_eq!(parse("/Cash 10").kind, MessageKind::Money);
}

#[test]
fn parse_money_does_not_validate_amount() {
    assert_eq!(parse("/money lots").text, "lots");
}

// =============================================================
// Help
// =============================================================

#[test]
fn parse_help_lists_all_commands() {
    let parsed = parse("/help");
    assert_eq!(parsed.kind, MessageKind::Help);
    assert_eq!(parsed.text.lines().count(), 8);
    for token in ["/join", "/money", "/cash", "/announce", "/ann", "/system", "/sys", "/help"] {
        assert!(parsed.text.contains(token), "{token} missing from help");
    }
}

#[test]
fn parse_help_ignores_case() {
    assert_eq!(parse("/Help").kind, MessageKind::Help);
}

#[test]
fn parse_help_with_argument_is_unknown() {
    assert_eq!(parse("/help join"), ParsedCommand { kind: MessageKind::Error, text: UNKNOWN_COMMAND_TEXT.into() });
}

// =============================================================
// Errors and plain text
// =============================================================

#[test]
fn parse_unknown_command_is_error() {
    assert_eq!(parse("/bogus"), ParsedCommand { kind: MessageKind::Error, text: UNKNOWN_COMMAND_TEXT.into() });
}

#[test]
fn parse_known_command_without_argument_is_error() {
    assert_eq!(parse("/join").kind, MessageKind::Error);
    assert_eq!(parse("/money").kind, MessageKind::Error);
}

#[test]
fn parse_bare_sigil_is_error() {
    assert_eq!(parse("/").kind, MessageKind::Error);
}

#[test]
fn parse_plain_text_is_default_and_unchanged() {
    assert_eq!(parse("hello"), ParsedCommand { kind: MessageKind::Default, text: "hello".into() });
}

#[test]
fn parse_sigil_inside_text_is_plain_chat() {
    assert_eq!(parse("say /join Alice").kind, MessageKind::Default);
}

#[test]
fn parse_uses_custom_grammar_tables() {
    use crate::command::grammar::{Arity, CommandPattern, CommandSpec};

    let grammar = CommandGrammar::new(
        vec![CommandSpec { token: "/shout", description: "Shout", example: "/shout <text>" }],
        vec![CommandPattern { kind: MessageKind::Announcement, aliases: &["/shout"], arity: Arity::Argument }],
    );
    assert_eq!(grammar.parse("/shout hey").kind, MessageKind::Announcement);
    assert_eq!(grammar.parse("/help").kind, MessageKind::Error);
}
