//! Byte cursor over script source with line tracking.
//!
//! The cursor borrows the source for the duration of one token scan. Its
//! resting state between scans is a [`Position`], which is `Copy` so the
//! lexer can snapshot and restore it for free.

use ejs_diagnostic::{SourceLocation, Span};

/// Resting cursor state: byte offset plus line bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Byte offset of the next unread byte.
    pub offset: u32,
    /// 1-based line number of `offset`.
    pub line: u32,
    /// Byte offset where the current line begins.
    pub line_start: u32,
}

impl Position {
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        line_start: 0,
    };

    /// 1-based byte column of `offset` within its line.
    #[inline]
    pub fn column(&self) -> u32 {
        self.offset - self.line_start + 1
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

/// Scanning cursor. Reads past the end yield `0x00`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: u32,
    line: u32,
    line_start: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str, at: Position) -> Self {
        debug_assert!(at.offset as usize <= src.len());
        Cursor {
            src,
            pos: at.offset,
            line: at.line,
            line_start: at.line_start,
        }
    }

    /// State to store back into the lexer once scanning is done.
    #[inline]
    pub(crate) fn position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            line_start: self.line_start,
        }
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.src.as_bytes().get(pos as usize).copied().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos as usize >= self.src.len()
    }

    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.pos
    }

    /// Advance over one byte that is known not to be `\n`.
    #[inline]
    pub(crate) fn advance(&mut self) {
        debug_assert_ne!(self.current(), b'\n');
        self.pos += 1;
    }

    /// Advance over a `\n`, starting a new line.
    #[inline]
    pub(crate) fn advance_newline(&mut self) {
        debug_assert_eq!(self.current(), b'\n');
        self.pos += 1;
        self.line += 1;
        self.line_start = self.pos;
    }

    /// Jump forward to `target`, counting any newlines crossed.
    pub(crate) fn advance_to(&mut self, target: u32) {
        debug_assert!(target >= self.pos);
        let skipped = &self.src.as_bytes()[self.pos as usize..target as usize];
        let newlines = to_offset(memchr::memchr_iter(b'\n', skipped).count());
        if let Some(last) = memchr::memrchr(b'\n', skipped) {
            self.line = self.line.saturating_add(newlines);
            self.line_start = self.pos.saturating_add(to_offset(last + 1));
        }
        self.pos = target;
    }

    /// Jump to the end of the source.
    pub(crate) fn advance_to_end(&mut self) {
        self.advance_to(to_offset(self.src.len()));
    }

    /// The character starting at byte `pos`, if `pos` is a char boundary.
    pub(crate) fn char_at(&self, pos: u32) -> Option<char> {
        self.src.get(pos as usize..)?.chars().next()
    }

    /// Advance while `pred` holds for the current byte. `pred(b'\n')` must
    /// be false.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Skip spaces, tabs and carriage returns.
    #[inline]
    pub(crate) fn skip_blanks(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | b'\r'));
    }

    /// Advance to the next `\n` (not consumed) or EOF.
    pub(crate) fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.src.as_bytes()[self.pos as usize..];
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.pos = self.pos.saturating_add(to_offset(offset)),
            None => self.pos = to_offset(self.src.len()),
        }
    }

    /// Offset of the first occurrence of `needle` at or after the cursor.
    pub(crate) fn find(&self, needle: &[u8]) -> Option<u32> {
        let remaining = &self.src.as_bytes()[self.pos as usize..];
        memchr::memmem::find(remaining, needle).map(|i| self.pos.saturating_add(to_offset(i)))
    }

    /// Offset of the first of two bytes at or after the cursor.
    pub(crate) fn find2(&self, a: u8, b: u8) -> Option<u32> {
        let remaining = &self.src.as_bytes()[self.pos as usize..];
        memchr::memchr2(a, b, remaining).map(|i| self.pos.saturating_add(to_offset(i)))
    }

    /// Source text between two offsets on character boundaries.
    #[inline]
    pub(crate) fn slice(&self, start: u32, end: u32) -> &'a str {
        self.src.get(start as usize..end as usize).unwrap_or("")
    }

    #[inline]
    pub(crate) fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Diagnostic location for `span`, reported against the cursor's line.
    pub(crate) fn location(&self, span: Span) -> SourceLocation {
        location_at(self.src, self.position(), span)
    }
}

/// Byte count as a source offset. Sources past 4 GiB saturate at
/// `u32::MAX` instead of wrapping.
#[inline]
pub(crate) fn to_offset(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// The full text of the line beginning at `line_start`, without its newline.
pub fn line_text(src: &str, line_start: u32) -> &str {
    let rest = src.get(line_start as usize..).unwrap_or("");
    let line = match memchr::memchr(b'\n', rest.as_bytes()) {
        Some(end) => &rest[..end],
        None => rest,
    };
    line.strip_suffix('\r').unwrap_or(line)
}

/// Build a diagnostic location for `span` with `at` as the reporting line.
pub fn location_at(src: &str, at: Position, span: Span) -> SourceLocation {
    let column = span.start.saturating_sub(at.line_start) + 1;
    SourceLocation {
        line: at.line,
        column,
        span,
        line_text: line_text(src, at.line_start).to_string(),
    }
}
