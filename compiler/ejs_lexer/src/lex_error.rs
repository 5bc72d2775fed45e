//! Lexical error constructors.
//!
//! Kept out of line so the scanner's hot path stays small.

use ejs_diagnostic::{EjsError, ErrorCode, Span};

use crate::cursor::Cursor;

#[cold]
pub(crate) fn unterminated_string(cursor: &Cursor<'_>, start: u32) -> EjsError {
    EjsError::new(ErrorCode::E0001, "Unterminated string")
        .with_location(cursor.location(Span::new(start, cursor.pos())))
}

#[cold]
pub(crate) fn unterminated_comment(cursor: &Cursor<'_>, start: u32) -> EjsError {
    EjsError::new(ErrorCode::E0002, "Unterminated comment")
        .with_location(cursor.location(Span::new(start, cursor.pos())))
}

#[cold]
pub(crate) fn invalid_escape(cursor: &Cursor<'_>, start: u32) -> EjsError {
    let text = cursor.slice_from(start);
    EjsError::new(
        ErrorCode::E0003,
        format!("Invalid escape sequence `{text}`"),
    )
    .with_location(cursor.location(Span::new(start, cursor.pos())))
}

#[cold]
pub(crate) fn invalid_identifier(cursor: &Cursor<'_>, start: u32, found: char) -> EjsError {
    let width = u32::try_from(found.len_utf8()).unwrap_or(1);
    EjsError::new(
        ErrorCode::E0004,
        format!("Invalid identifier `{}`", found.escape_default()),
    )
    .with_location(cursor.location(Span::new(start, start + width)))
}
