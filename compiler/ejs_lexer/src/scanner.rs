//! Token scanner.
//!
//! One call to [`scan`] skips blanks and comments, then dispatches on the
//! first byte to a focused method that consumes exactly one token.

use ejs_diagnostic::{EjsError, Span};

use crate::cursor::Cursor;
use crate::escape::read_escape;
use crate::lex_error;
use crate::token::{BinaryOp, IncDecOp, LexMode, LogicalOp, Token, TokenKind};

/// Scan the next token from `cursor`.
pub(crate) fn scan(cursor: &mut Cursor<'_>, mode: LexMode) -> Result<Token, EjsError> {
    Scanner { cursor, mode }.next_token()
}

struct Scanner<'c, 'a> {
    cursor: &'c mut Cursor<'a>,
    mode: LexMode,
}

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

impl Scanner<'_, '_> {
    fn next_token(&mut self) -> Result<Token, EjsError> {
        loop {
            self.cursor.skip_blanks();
            let start = self.cursor.pos();
            if self.cursor.is_eof() {
                return Ok(Token::new(TokenKind::Eof, "", Span::new(start, start)));
            }

            return match self.cursor.current() {
                b'\n' => {
                    self.cursor.advance_newline();
                    Ok(self.token(start, TokenKind::Newline))
                }
                b'/' => match self.cursor.peek() {
                    b'/' => {
                        self.cursor.eat_until_newline_or_eof();
                        continue;
                    }
                    b'*' => {
                        self.block_comment(start)?;
                        continue;
                    }
                    _ => Ok(self.single(start, TokenKind::Operator(BinaryOp::Div))),
                },
                b'(' => Ok(self.single(start, TokenKind::LParen)),
                b')' => Ok(self.single(start, TokenKind::RParen)),
                b'{' => Ok(self.single(start, TokenKind::LBrace)),
                b'}' => Ok(self.single(start, TokenKind::RBrace)),
                b';' => Ok(self.single(start, TokenKind::Semicolon)),
                b',' => Ok(self.single(start, TokenKind::Comma)),
                b'*' => Ok(self.single(start, TokenKind::Operator(BinaryOp::Mul))),
                b'%' => Ok(self.single(start, TokenKind::Operator(BinaryOp::Mod))),
                b'+' => Ok(self.doubled(
                    start,
                    b'+',
                    TokenKind::IncDec(IncDecOp::Inc),
                    TokenKind::Operator(BinaryOp::Add),
                )),
                b'-' => Ok(self.doubled(
                    start,
                    b'-',
                    TokenKind::IncDec(IncDecOp::Dec),
                    TokenKind::Operator(BinaryOp::Sub),
                )),
                b'<' => Ok(self.angle(start, BinaryOp::Shl, BinaryOp::Le, BinaryOp::Lt)),
                b'>' => Ok(self.angle(start, BinaryOp::Shr, BinaryOp::Ge, BinaryOp::Gt)),
                b'=' => Ok(self.with_equal(
                    start,
                    TokenKind::Operator(BinaryOp::Eq),
                    TokenKind::Assign,
                )),
                b'!' => Ok(self.with_equal(
                    start,
                    TokenKind::Operator(BinaryOp::Ne),
                    TokenKind::Operator(BinaryOp::Not),
                )),
                b'&' => self.logical(start, b'&', LogicalOp::And),
                b'|' => self.logical(start, b'|', LogicalOp::Or),
                quote @ (b'"' | b'\'') => self.string(start, quote),
                b'0'..=b'9' => Ok(self.number(start)),
                b if is_ident_start(b) => Ok(self.identifier(start)),
                _ => Err(self.invalid(start)),
            };
        }
    }

    fn token(&self, start: u32, kind: TokenKind) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(start),
            Span::new(start, self.cursor.pos()),
        )
    }

    fn single(&mut self, start: u32, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.token(start, kind)
    }

    /// `++` / `+` style pairs.
    fn doubled(&mut self, start: u32, twin: u8, double: TokenKind, single: TokenKind) -> Token {
        self.cursor.advance();
        if self.cursor.current() == twin {
            self.cursor.advance();
            return self.token(start, double);
        }
        self.token(start, single)
    }

    /// `<<` / `<=` / `<` and the `>` counterparts.
    fn angle(&mut self, start: u32, shift: BinaryOp, or_equal: BinaryOp, plain: BinaryOp) -> Token {
        let first = self.cursor.current();
        self.cursor.advance();
        let op = match self.cursor.current() {
            b if b == first => shift,
            b'=' => or_equal,
            _ => plain,
        };
        if op != plain {
            self.cursor.advance();
        }
        self.token(start, TokenKind::Operator(op))
    }

    /// `==` / `=` and `!=` / `!`.
    fn with_equal(&mut self, start: u32, with: TokenKind, without: TokenKind) -> Token {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            return self.token(start, with);
        }
        self.token(start, without)
    }

    fn logical(&mut self, start: u32, twin: u8, op: LogicalOp) -> Result<Token, EjsError> {
        if self.cursor.peek() != twin {
            return Err(self.invalid(start));
        }
        self.cursor.advance();
        self.cursor.advance();
        Ok(self.token(start, TokenKind::Logical(op)))
    }

    fn block_comment(&mut self, start: u32) -> Result<(), EjsError> {
        self.cursor.advance();
        self.cursor.advance();
        match self.cursor.find(b"*/") {
            Some(close) => {
                self.cursor.advance_to(close + 2);
                Ok(())
            }
            None => Err(lex_error::unterminated_comment(self.cursor, start)),
        }
    }

    fn number(&mut self, start: u32) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.token(start, TokenKind::Number)
    }

    fn identifier(&mut self, start: u32) -> Token {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start);
        let span = Span::new(start, self.cursor.pos());

        if self.mode == LexMode::Statement {
            if let Some(kind) = TokenKind::keyword(text) {
                return Token::new(kind, text, span);
            }
        }

        // Lookahead over spaces and tabs only; the blanks stay unconsumed.
        let mut probe = *self.cursor;
        probe.eat_while(|b| b == b' ' || b == b'\t');
        let kind = if probe.current() == b'(' {
            TokenKind::FunctionName
        } else {
            TokenKind::Identifier
        };
        Token::new(kind, text, span)
    }

    fn string(&mut self, start: u32, quote: u8) -> Result<Token, EjsError> {
        self.cursor.advance();
        let mut text = String::new();
        loop {
            let Some(stop) = self.cursor.find2(quote, b'\\') else {
                self.cursor.advance_to_end();
                return Err(lex_error::unterminated_string(self.cursor, start));
            };
            text.push_str(self.cursor.slice(self.cursor.pos(), stop));
            self.cursor.advance_to(stop);
            if self.cursor.current() == quote {
                self.cursor.advance();
                return Ok(Token::new(
                    TokenKind::Literal,
                    text,
                    Span::new(start, self.cursor.pos()),
                ));
            }
            text.push(read_escape(self.cursor)?);
        }
    }

    fn invalid(&self, start: u32) -> EjsError {
        let found = self
            .cursor
            .char_at(start)
            .unwrap_or(char::from(self.cursor.current()));
        lex_error::invalid_identifier(self.cursor, start, found)
    }
}

#[cfg(test)]
mod tests;
