use super::*;

fn tokens(input: &str) -> Vec<&'static str> {
    CommandGrammar::builtin()
        .suggest(input)
        .into_iter()
        .map(|c| c.token)
        .collect()
}

// =============================================================
// Without sigil
// =============================================================

#[test]
fn suggest_empty_input_is_empty() {
    assert!(tokens("").is_empty());
}

#[test]
fn suggest_plain_text_is_empty() {
    assert!(tokens("join").is_empty());
    assert!(tokens("hello /join").is_empty());
}

// =============================================================
// Token prefix and description matches
// =============================================================

#[test]
fn suggest_bare_sigil_lists_every_command() {
    assert_eq!(tokens("/").len(), 8);
}

#[test]
fn suggest_token_prefix() {
    assert_eq!(tokens("/j"), vec!["/join"]);
    assert_eq!(tokens("/help"), vec!["/help"]);
}

#[test]
fn suggest_includes_description_matches() {
    // "/cash" is described as an alternative for money.
    assert_eq!(tokens("/mo"), vec!["/money", "/cash"]);
    assert_eq!(tokens("/short"), vec!["/ann", "/sys"]);
    assert_eq!(tokens("/message"), vec!["/join", "/system"]);
}

#[test]
fn suggest_ignores_case() {
    assert_eq!(tokens("/SYS"), vec!["/system", "/sys"]);
    assert_eq!(tokens("/Ann"), vec!["/announce", "/ann"]);
}

#[test]
fn suggest_keeps_table_order() {
    let grammar = CommandGrammar::builtin();
    let all = grammar.suggest("/");
    assert_eq!(all.as_slice(), grammar.commands());
}

#[test]
fn suggest_after_completion_keeps_completed_command() {
    assert_eq!(tokens("/join "), vec!["/join"]);
}

#[test]
fn suggest_with_argument_typed_is_empty() {
    assert!(tokens("/join Alice").is_empty());
    assert!(tokens("/zzz").is_empty());
}

#[test]
fn suggest_results_always_satisfy_filter() {
    let grammar = CommandGrammar::builtin();
    for input in ["/", "/a", "/s", "/sh", "/me", "/CO", "/ann", "/x", "/join "] {
        let prefix = input.to_lowercase();
        let remainder = prefix[1..].to_owned();
        let expected: Vec<CommandSpec> = grammar
            .commands()
            .iter()
            .filter(|c| c.token.to_lowercase().starts_with(&prefix) || c.description.to_lowercase().contains(&remainder))
            .copied()
            .collect();
        assert_eq!(grammar.suggest(input), expected, "input {input:?}");
    }
}
