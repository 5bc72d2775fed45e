use super::*;
use crate::cursor::Position;
use ejs_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

fn kinds(src: &str, mode: LexMode) -> Vec<TokenKind> {
    let mut cursor = Cursor::new(src, Position::START);
    let mut out = Vec::new();
    loop {
        let Ok(token) = scan(&mut cursor, mode) else {
            panic!("lex error in {src:?}");
        };
        if token.is(TokenKind::Eof) {
            return out;
        }
        out.push(token.kind);
    }
}

fn first(src: &str, mode: LexMode) -> Result<Token, EjsError> {
    let mut cursor = Cursor::new(src, Position::START);
    scan(&mut cursor, mode)
}

fn error_code(src: &str) -> ErrorCode {
    let mut cursor = Cursor::new(src, Position::START);
    loop {
        match scan(&mut cursor, LexMode::Expression) {
            Ok(t) if t.is(TokenKind::Eof) => panic!("no error in {src:?}"),
            Ok(_) => {}
            Err(e) => return e.code,
        }
    }
}

#[test]
fn punctuation_and_operators() {
    use TokenKind::*;
    assert_eq!(
        kinds("( ) { } ; , = == != ! < <= << > >= >> + ++ - -- * / % && ||", LexMode::Expression),
        vec![
            LParen,
            RParen,
            LBrace,
            RBrace,
            Semicolon,
            Comma,
            Assign,
            Operator(BinaryOp::Eq),
            Operator(BinaryOp::Ne),
            Operator(BinaryOp::Not),
            Operator(BinaryOp::Lt),
            Operator(BinaryOp::Le),
            Operator(BinaryOp::Shl),
            Operator(BinaryOp::Gt),
            Operator(BinaryOp::Ge),
            Operator(BinaryOp::Shr),
            Operator(BinaryOp::Add),
            IncDec(IncDecOp::Inc),
            Operator(BinaryOp::Sub),
            IncDec(IncDecOp::Dec),
            Operator(BinaryOp::Mul),
            Operator(BinaryOp::Div),
            Operator(BinaryOp::Mod),
            Logical(LogicalOp::And),
            Logical(LogicalOp::Or),
        ]
    );
}

#[test]
fn operators_without_spaces() {
    use TokenKind::*;
    assert_eq!(
        kinds("i<3;i++", LexMode::Expression),
        vec![
            Identifier,
            Operator(BinaryOp::Lt),
            Number,
            Semicolon,
            Identifier,
            IncDec(IncDecOp::Inc),
        ]
    );
}

#[test]
fn keywords_only_in_statement_mode() {
    assert_eq!(kinds("if else var for return", LexMode::Statement), vec![
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Var,
        TokenKind::For,
        TokenKind::Return,
    ]);
    assert_eq!(
        kinds("if else var", LexMode::Expression),
        vec![TokenKind::Identifier; 3]
    );
}

#[test]
fn function_name_lookahead() {
    assert_eq!(kinds("f(", LexMode::Expression)[0], TokenKind::FunctionName);
    assert_eq!(kinds("f \t (", LexMode::Expression)[0], TokenKind::FunctionName);
    assert_eq!(kinds("f\n(", LexMode::Expression)[0], TokenKind::Identifier);
    assert_eq!(kinds("if (", LexMode::Statement)[0], TokenKind::If);
    assert_eq!(kinds("if (", LexMode::Expression)[0], TokenKind::FunctionName);
}

#[test]
fn function_name_keeps_blanks_unconsumed() {
    let mut cursor = Cursor::new("f  (x)", Position::START);
    let Ok(token) = scan(&mut cursor, LexMode::Expression) else {
        panic!("lex error");
    };
    assert_eq!(token.text, "f");
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn identifiers_and_numbers() {
    let Ok(token) = first("  $_abc9 ", LexMode::Expression) else {
        panic!("lex error");
    };
    assert_eq!(token.kind, TokenKind::Identifier);
    assert_eq!(token.text, "$_abc9");
    assert_eq!(token.span, Span::new(2, 8));

    let Ok(token) = first("0042x", LexMode::Expression) else {
        panic!("lex error");
    };
    assert_eq!(token.kind, TokenKind::Number);
    assert_eq!(token.text, "0042");
}

#[test]
fn strings_are_unescaped() {
    let Ok(token) = first(r#""a\tb\x41""#, LexMode::Expression) else {
        panic!("lex error");
    };
    assert_eq!(token.kind, TokenKind::Literal);
    assert_eq!(token.text, "a\tbA");

    let Ok(token) = first(r#"'it"s'"#, LexMode::Expression) else {
        panic!("lex error");
    };
    assert_eq!(token.text, "it\"s");

    let Ok(token) = first("''", LexMode::Expression) else {
        panic!("lex error");
    };
    assert_eq!(token.text, "");
}

#[test]
fn newlines_are_tokens_and_counted() {
    let mut cursor = Cursor::new("a\r\n\nb", Position::START);
    let kinds: Vec<_> = std::iter::from_fn(|| {
        scan(&mut cursor, LexMode::Statement)
            .ok()
            .filter(|t| !t.is(TokenKind::Eof))
            .map(|t| t.kind)
    })
    .collect();
    assert_eq!(kinds, vec![
        TokenKind::Identifier,
        TokenKind::Newline,
        TokenKind::Newline,
        TokenKind::Identifier,
    ]);
    assert_eq!(cursor.position().line, 3);
}

#[test]
fn comments_are_skipped() {
    assert_eq!(
        kinds("a // trailing\nb /* x\ny */ c", LexMode::Expression),
        vec![
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Identifier,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn block_comment_advances_line() {
    let mut cursor = Cursor::new("/* a\nb\n */ x", Position::START);
    let Ok(token) = scan(&mut cursor, LexMode::Expression) else {
        panic!("lex error");
    };
    assert_eq!(token.text, "x");
    assert_eq!(cursor.position().line, 3);
}

#[test]
fn lexical_errors() {
    assert_eq!(error_code("\"abc"), ErrorCode::E0001);
    assert_eq!(error_code("'abc\\"), ErrorCode::E0001);
    assert_eq!(error_code("/* open"), ErrorCode::E0002);
    assert_eq!(error_code("\"\\q\""), ErrorCode::E0003);
    assert_eq!(error_code("a # b"), ErrorCode::E0004);
    assert_eq!(error_code("a & b"), ErrorCode::E0004);
    assert_eq!(error_code("a | b"), ErrorCode::E0004);
    assert_eq!(error_code("é"), ErrorCode::E0004);
}

#[test]
fn error_location_points_at_line() {
    let Err(err) = first_error("x = 1;\ny = #;") else {
        panic!("expected error");
    };
    let Some(loc) = err.location else {
        panic!("expected location");
    };
    assert_eq!(loc.line, 2);
    assert_eq!(loc.column, 5);
    assert_eq!(loc.line_text, "y = #;");
}

fn first_error(src: &str) -> Result<(), EjsError> {
    let mut cursor = Cursor::new(src, Position::START);
    loop {
        if scan(&mut cursor, LexMode::Expression)?.is(TokenKind::Eof) {
            return Ok(());
        }
    }
}
