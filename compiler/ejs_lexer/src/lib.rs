//! Tokenizer for Ejscript.
//!
//! The evaluator never builds a syntax tree, so the lexer is its only view
//! of the program. Three properties follow from that:
//!
//! - **Single-slot push-back.** A production that reads one token too many
//!   hands it back with [`Lexer::push_back`]. There is exactly one slot; a
//!   second push-back replaces the first.
//! - **Mode-dependent keywords.** Reserved words are only recognized in
//!   [`LexMode::Statement`]. Inside expressions every word is an identifier.
//! - **Re-lexable snapshots.** Loops replay their condition, increment and
//!   body by restoring a [`LexSnapshot`]. The source is immutable, so a
//!   restored lexer produces exactly the same tokens again.

mod cursor;
mod escape;
mod lex_error;
mod scanner;
mod token;

use std::sync::Arc;

use ejs_diagnostic::{EjsError, SourceLocation, Span};
use tracing::trace;

pub use cursor::{line_text, location_at, Position};
pub use token::{BinaryOp, IncDecOp, LexMode, LogicalOp, Token, TokenKind};

use cursor::Cursor;

/// Saved lexer state: cursor position plus the push-back slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexSnapshot {
    position: Position,
    pushed: Option<Token>,
}

impl LexSnapshot {
    /// Byte offset the snapshot resumes at.
    pub fn offset(&self) -> u32 {
        self.position.offset
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

/// An input context: one script's source and the read position within it.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: Arc<str>,
    position: Position,
    pushed: Option<Token>,
    /// Where the most recently returned token started.
    last_token_start: u32,
}

impl Lexer {
    /// Take a private copy of `text` and position at its start.
    pub fn open(text: &str) -> Self {
        Self::from_shared(Arc::from(text))
    }

    /// Lex an already shared source without copying it.
    pub fn from_shared(source: Arc<str>) -> Self {
        Lexer {
            source,
            position: Position::START,
            pushed: None,
            last_token_start: 0,
        }
    }

    /// Read the next token, consuming a pending push-back first.
    pub fn next_token(&mut self, mode: LexMode) -> Result<Token, EjsError> {
        if let Some(token) = self.pushed.take() {
            self.last_token_start = token.span.start;
            return Ok(token);
        }
        let mut cursor = Cursor::new(&self.source, self.position);
        let result = scanner::scan(&mut cursor, mode);
        self.position = cursor.position();
        if let Ok(token) = &result {
            self.last_token_start = token.span.start;
        }
        result
    }

    /// Return a token so the next read yields it again.
    ///
    /// The slot holds one token; pushing twice keeps only the second.
    pub fn push_back(&mut self, token: Token) {
        self.pushed = Some(token);
    }

    /// Whether a pushed-back token is waiting.
    pub fn has_pushed_back(&self) -> bool {
        self.pushed.is_some()
    }

    /// Capture the current state for a later [`restore`](Self::restore).
    pub fn snapshot(&self) -> LexSnapshot {
        trace!(offset = self.position.offset, line = self.position.line, "lexer snapshot");
        LexSnapshot {
            position: self.position,
            pushed: self.pushed.clone(),
        }
    }

    /// Reinstate a previously captured state.
    pub fn restore(&mut self, snapshot: &LexSnapshot) {
        trace!(
            from = self.position.offset,
            to = snapshot.position.offset,
            "lexer restore"
        );
        self.position = snapshot.position;
        self.pushed.clone_from(&snapshot.pushed);
    }

    /// Discard everything up to the end of input.
    pub fn skip_to_end(&mut self) {
        let mut cursor = Cursor::new(&self.source, self.position);
        cursor.advance_to_end();
        self.position = cursor.position();
        self.pushed = None;
    }

    /// Byte offset of the cursor. A pending push-back does not count as
    /// unread input.
    pub fn offset(&self) -> u32 {
        self.position.offset
    }

    /// 1-based line of the cursor.
    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// 1-based column of the cursor.
    pub fn column(&self) -> u32 {
        self.position.column()
    }

    /// Full text of the line the cursor is on.
    pub fn current_line(&self) -> &str {
        line_text(&self.source, self.position.line_start)
    }

    pub fn source(&self) -> &Arc<str> {
        &self.source
    }

    /// Diagnostic location of the most recently read token.
    pub fn location(&self) -> SourceLocation {
        let start = self.last_token_start;
        let end = self.position.offset.max(start);
        location_at(&self.source, self.position, Span::new(start, end))
    }
}

/// Tokenize a whole script in one mode, stopping before end of input.
pub fn tokenize(text: &str, mode: LexMode) -> Result<Vec<Token>, EjsError> {
    let mut lexer = Lexer::open(text);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token(mode)?;
        if token.is(TokenKind::Eof) {
            return Ok(tokens);
        }
        tokens.push(token);
    }
}

#[cfg(test)]
mod tests;
