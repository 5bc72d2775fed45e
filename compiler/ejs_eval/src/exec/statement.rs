//! Statements, blocks and statement terminators.

use ejs_diagnostic::EjsError;
use ejs_lexer::{LexMode, TokenKind};

use super::Flow;
use crate::{errors, Interpreter};

impl Interpreter {
    pub(crate) fn parse_statement(&mut self, exec: bool) -> Result<Flow, EjsError> {
        self.nested(|this| this.statement(exec))
    }

    fn statement(&mut self, exec: bool) -> Result<Flow, EjsError> {
        let token = loop {
            let token = self.next(LexMode::Statement)?;
            if !token.is(TokenKind::Newline) {
                break token;
            }
        };

        match token.kind {
            TokenKind::Eof => Ok(Flow::Eof),
            TokenKind::Semicolon => Ok(Flow::Empty),
            TokenKind::RBrace => {
                self.push_back(token);
                Ok(Flow::BlockEnd)
            }
            TokenKind::LBrace => self.parse_block(exec),
            TokenKind::If => self.parse_if(exec),
            TokenKind::For => self.parse_for(exec),
            TokenKind::Var => {
                let value = self.parse_declarations(exec)?;
                self.expect_terminator()?;
                Ok(Flow::value(value, exec))
            }
            TokenKind::Return => self.parse_return(exec),
            TokenKind::Else => Err(errors::unexpected_token(&token)),
            _ => {
                self.push_back(token);
                let value = self.parse_simple(exec)?;
                self.expect_terminator()?;
                Ok(Flow::value(value, exec))
            }
        }
    }

    /// `{ statement* }`. The opening brace has been read. Blocks do not
    /// open a scope frame.
    fn parse_block(&mut self, exec: bool) -> Result<Flow, EjsError> {
        let mut last = Flow::Empty;
        loop {
            match self.parse_statement(exec)? {
                value @ Flow::Value(_) => last = value,
                Flow::Empty => {}
                Flow::BlockEnd => {
                    self.expect_close(TokenKind::RBrace, "}")?;
                    return Ok(last);
                }
                Flow::Eof => return Err(errors::missing_delimiter("}")),
                ret @ Flow::Return(_) => return Ok(ret),
            }
        }
    }

    fn parse_return(&mut self, exec: bool) -> Result<Flow, EjsError> {
        let token = self.next(LexMode::Expression)?;
        let bare = matches!(
            token.kind,
            TokenKind::Semicolon | TokenKind::Newline | TokenKind::Eof | TokenKind::RBrace
        );
        self.push_back(token);
        let value = if bare {
            String::new()
        } else {
            self.parse_rel_expr(exec)?
        };

        if exec {
            self.input.skip_to_end();
            return Ok(Flow::Return(value));
        }
        self.expect_terminator()?;
        Ok(Flow::Empty)
    }

    /// A simple statement ends at `;`, a newline or end of input. A `}` also
    /// ends it and is left for the enclosing block. Newlines that follow are
    /// skipped.
    fn expect_terminator(&mut self) -> Result<(), EjsError> {
        let token = self.next(LexMode::Statement)?;
        match token.kind {
            TokenKind::Semicolon | TokenKind::Newline => {}
            TokenKind::Eof | TokenKind::RBrace => {
                self.push_back(token);
                return Ok(());
            }
            _ => return Err(errors::unexpected_token(&token)),
        }
        self.skip_newlines()
    }

    /// Consume newlines, leaving the first other token pushed back.
    pub(crate) fn skip_newlines(&mut self) -> Result<(), EjsError> {
        loop {
            let token = self.next(LexMode::Statement)?;
            if !token.is(TokenKind::Newline) {
                self.push_back(token);
                return Ok(());
            }
        }
    }
}
