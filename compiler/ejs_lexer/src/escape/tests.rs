use super::*;
use crate::cursor::Position;
use ejs_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

/// Decode the escape at the start of `src`, returning the char and how far
/// the cursor moved.
fn decode(src: &str) -> Result<(char, u32), ErrorCode> {
    let mut cursor = Cursor::new(src, Position::START);
    read_escape(&mut cursor)
        .map(|c| (c, cursor.pos()))
        .map_err(|e| e.code)
}

#[test]
fn single_character_escapes() {
    assert_eq!(decode(r"\n"), Ok(('\n', 2)));
    assert_eq!(decode(r"\t"), Ok(('\t', 2)));
    assert_eq!(decode(r"\b"), Ok(('\u{8}', 2)));
    assert_eq!(decode(r"\f"), Ok(('\u{c}', 2)));
    assert_eq!(decode(r"\v"), Ok(('\u{b}', 2)));
    assert_eq!(decode(r"\a"), Ok(('\u{7}', 2)));
    assert_eq!(decode(r"\/"), Ok(('/', 2)));
    assert_eq!(decode(r"\\"), Ok(('\\', 2)));
    assert_eq!(decode(r#"\""#), Ok(('"', 2)));
    assert_eq!(decode(r"\'"), Ok(('\'', 2)));
}

#[test]
fn hex_escapes() {
    assert_eq!(decode(r"\x41"), Ok(('A', 4)));
    assert_eq!(decode(r"\x9"), Ok(('\t', 3)));
    assert_eq!(decode(r"\xff"), Ok(('\u{ff}', 4)));
    // Only two digits are taken.
    assert_eq!(decode(r"\x414"), Ok(('A', 4)));
    assert_eq!(decode(r"\xg"), Err(ErrorCode::E0003));
}

#[test]
fn octal_escapes() {
    assert_eq!(decode(r"\0"), Ok(('\0', 2)));
    assert_eq!(decode(r"\012"), Ok(('\n', 4)));
    assert_eq!(decode(r"\0777"), Ok(('?', 4)));
    assert_eq!(decode(r"\08"), Ok(('\0', 2)));
}

#[test]
fn decimal_escapes() {
    assert_eq!(decode(r"\65"), Ok(('A', 3)));
    assert_eq!(decode(r"\255"), Ok(('\u{ff}', 4)));
    assert_eq!(decode(r"\2550"), Ok(('\u{ff}', 4)));
    assert_eq!(decode(r"\256"), Err(ErrorCode::E0003));
    assert_eq!(decode(r"\999"), Err(ErrorCode::E0003));
}

#[test]
fn unknown_escape_is_an_error() {
    assert_eq!(decode(r"\q"), Err(ErrorCode::E0003));
    assert_eq!(decode("\\é"), Err(ErrorCode::E0003));
    assert_eq!(decode("\\\n"), Err(ErrorCode::E0003));
}

#[test]
fn backslash_at_end_is_unterminated() {
    assert_eq!(decode("\\"), Err(ErrorCode::E0001));
}
