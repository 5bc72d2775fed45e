use super::*;
use pretty_assertions::assert_eq;

fn next(lexer: &mut Lexer) -> Token {
    match lexer.next_token(LexMode::Expression) {
        Ok(token) => token,
        Err(e) => panic!("lex error: {}", e.report()),
    }
}

#[test]
fn push_back_returns_token_once() {
    let mut lexer = Lexer::open("a b");
    let a = next(&mut lexer);
    lexer.push_back(a.clone());
    assert!(lexer.has_pushed_back());
    assert_eq!(next(&mut lexer), a);
    assert!(!lexer.has_pushed_back());
    assert_eq!(next(&mut lexer).text, "b");
}

#[test]
fn second_push_back_replaces_first() {
    let mut lexer = Lexer::open("a b c");
    let a = next(&mut lexer);
    let b = next(&mut lexer);
    lexer.push_back(a);
    lexer.push_back(b.clone());
    assert_eq!(next(&mut lexer), b);
    assert_eq!(next(&mut lexer).text, "c");
}

#[test]
fn push_back_does_not_move_offset() {
    let mut lexer = Lexer::open("}");
    let close = next(&mut lexer);
    let offset = lexer.offset();
    lexer.push_back(close);
    assert_eq!(lexer.offset(), offset);
}

#[test]
fn snapshot_restore_replays_tokens() {
    let mut lexer = Lexer::open("x = 1;\ny = x + 2;");
    next(&mut lexer);
    let snap = lexer.snapshot();
    let first: Vec<Token> = (0..6).map(|_| next(&mut lexer)).collect();
    lexer.restore(&snap);
    let again: Vec<Token> = (0..6).map(|_| next(&mut lexer)).collect();
    assert_eq!(first, again);
    assert_eq!(lexer.line(), 2);
}

#[test]
fn snapshot_includes_push_back() {
    let mut lexer = Lexer::open("a b");
    let a = next(&mut lexer);
    lexer.push_back(a.clone());
    let snap = lexer.snapshot();
    assert_eq!(next(&mut lexer), a);
    next(&mut lexer);
    lexer.restore(&snap);
    assert_eq!(next(&mut lexer), a);
}

#[test]
fn open_copies_source() {
    let text = String::from("v");
    let mut lexer = Lexer::open(&text);
    drop(text);
    assert_eq!(next(&mut lexer).text, "v");
}

#[test]
fn current_line_and_position() {
    let mut lexer = Lexer::open("a = 1;\nb = 22;\n");
    for _ in 0..6 {
        next(&mut lexer);
    }
    assert_eq!(lexer.line(), 2);
    assert_eq!(lexer.current_line(), "b = 22;");
    assert_eq!(lexer.column(), 2);
    let loc = lexer.location();
    assert_eq!(loc.line, 2);
    assert_eq!(loc.span, Span::new(7, 8));
}

#[test]
fn skip_to_end_discards_rest() {
    let mut lexer = Lexer::open("a b c");
    let a = next(&mut lexer);
    lexer.push_back(a);
    lexer.skip_to_end();
    assert!(next(&mut lexer).is(TokenKind::Eof));
}

#[test]
fn tokenize_stops_before_eof() {
    let Ok(tokens) = tokenize("var x = 'y';", LexMode::Statement) else {
        panic!("lex error");
    };
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![
        TokenKind::Var,
        TokenKind::Identifier,
        TokenKind::Assign,
        TokenKind::Literal,
        TokenKind::Semicolon,
    ]);
}
