//! Escape sequence decoding inside string literals.
//!
//! Recognized forms:
//! - single character: `\b \f \n \r \t \v \a \\ \' \" \/`
//! - hex: `\xH` or `\xHH`
//! - octal: `\0`, `\0N`, `\0NN`
//! - decimal: `\D`, `\DD`, `\DDD` with a leading `1`-`9`
//!
//! Numeric escapes denote a byte value and must not exceed 255. The byte
//! is stored as the Unicode scalar with the same value.

use ejs_diagnostic::EjsError;

use crate::cursor::Cursor;
use crate::lex_error;

/// Largest value a numeric escape may produce.
const MAX_ESCAPE_VALUE: u32 = 255;

/// Decode one escape. The cursor sits on the backslash and ends up just
/// past the escape.
pub(crate) fn read_escape(cursor: &mut Cursor<'_>) -> Result<char, EjsError> {
    let start = cursor.pos();
    cursor.advance();
    if cursor.is_eof() {
        return Err(lex_error::unterminated_string(cursor, start));
    }

    let simple = match cursor.current() {
        b'b' => Some('\u{8}'),
        b'f' => Some('\u{c}'),
        b'n' => Some('\n'),
        b'r' => Some('\r'),
        b't' => Some('\t'),
        b'v' => Some('\u{b}'),
        b'a' => Some('\u{7}'),
        b'\\' => Some('\\'),
        b'\'' => Some('\''),
        b'"' => Some('"'),
        b'/' => Some('/'),
        _ => None,
    };
    if let Some(c) = simple {
        cursor.advance();
        return Ok(c);
    }

    let value = match cursor.current() {
        b'x' => {
            cursor.advance();
            let digits = take_digits(cursor, 2, 16);
            match digits {
                Some(v) => v,
                None => return Err(lex_error::invalid_escape(cursor, start)),
            }
        }
        // The leading zero counts toward the three-digit limit.
        b'0' => take_digits(cursor, 3, 8).unwrap_or(0),
        b'1'..=b'9' => take_digits(cursor, 3, 10).unwrap_or(0),
        b'\n' => return Err(lex_error::invalid_escape(cursor, start)),
        _ => {
            advance_char(cursor);
            return Err(lex_error::invalid_escape(cursor, start));
        }
    };

    if value > MAX_ESCAPE_VALUE {
        return Err(lex_error::invalid_escape(cursor, start));
    }
    char::from_u32(value).ok_or_else(|| lex_error::invalid_escape(cursor, start))
}

/// Consume up to `max` digits in `radix`. `None` if there were none.
fn take_digits(cursor: &mut Cursor<'_>, max: usize, radix: u32) -> Option<u32> {
    let mut value: Option<u32> = None;
    for _ in 0..max {
        let Some(digit) = char::from(cursor.current()).to_digit(radix) else {
            break;
        };
        value = Some(value.unwrap_or(0) * radix + digit);
        cursor.advance();
    }
    value
}

/// Step over one UTF-8 character so error spans cover all of it.
fn advance_char(cursor: &mut Cursor<'_>) {
    let width = match cursor.current() {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    };
    for _ in 0..width {
        if cursor.is_eof() {
            break;
        }
        cursor.advance();
    }
}

#[cfg(test)]
mod tests;
