use super::*;
use ejs_lexer::{tokenize, LexMode};
use pretty_assertions::assert_eq;

#[test]
fn char_range_counts_characters() {
    assert_eq!(char_range("abc", 1..2), 1..2);
    assert_eq!(char_range("é = 1", 3..4), 2..3);
    assert_eq!(char_range("ab", 1..10), 1..2);
}

#[test]
fn char_range_backs_off_inside_a_character() {
    assert_eq!(char_range("éx", 1..3), 0..2);
}

#[test]
fn explain_known_and_unknown_codes() {
    assert_eq!(
        explain_text("E6001").as_deref(),
        Some("E6001: undefined variable (runtime error)")
    );
    assert_eq!(
        explain_text("E7001").as_deref(),
        Some("E7001: recursion limit exceeded (resource error)")
    );
    assert_eq!(explain_text("E9999"), None);
    assert_eq!(explain_text("nonsense"), None);
}

#[test]
fn format_tokens_lists_spans() {
    let Ok(tokens) = tokenize("x = 1;", LexMode::Statement) else {
        panic!("lexing failed");
    };
    let text = format_tokens(&tokens);
    assert_eq!(text.lines().count(), tokens.len());
    assert!(text.starts_with("  Identifier x @ 0..1\n"));
}
