//! `if` and `for`.
//!
//! Loops are replayed from the source rather than from a parsed body: the
//! condition, increment and body positions are captured once with lexer
//! snapshots and re-lexed on every iteration.

use ejs_diagnostic::EjsError;
use ejs_lexer::{LexMode, TokenKind};
use tracing::debug;

use super::Flow;
use crate::operators::is_truthy;
use crate::{errors, Interpreter};

impl Interpreter {
    /// A relational expression that must be followed by `)` or `;`. The
    /// terminator is left unread.
    pub(crate) fn parse_condition(&mut self, exec: bool) -> Result<String, EjsError> {
        let value = self.parse_rel_expr(exec)?;
        let token = self.next(LexMode::Expression)?;
        match token.kind {
            TokenKind::RParen | TokenKind::Semicolon => {
                self.push_back(token);
                Ok(value)
            }
            _ => Err(errors::unexpected_token(&token)),
        }
    }

    /// The statement controlled by `if`, `else` or `for`.
    fn parse_branch(&mut self, exec: bool) -> Result<Flow, EjsError> {
        match self.parse_statement(exec)? {
            Flow::BlockEnd | Flow::Eof => {
                let token = self.next(LexMode::Statement)?;
                Err(errors::unexpected_token(&token))
            }
            flow => Ok(flow),
        }
    }

    /// `if (cond) statement [else statement]`, with `if` already read.
    ///
    /// Both branches are parsed; at most one executes. The result is the
    /// executed branch's result, or the condition when no branch ran.
    pub(crate) fn parse_if(&mut self, exec: bool) -> Result<Flow, EjsError> {
        self.expect(TokenKind::LParen)?;
        let cond = self.parse_condition(exec)?;
        self.expect_close(TokenKind::RParen, ")")?;

        let taken = exec && is_truthy(&cond);
        let then_flow = self.parse_branch(taken)?;
        if matches!(then_flow, Flow::Return(_)) {
            return Ok(then_flow);
        }

        self.skip_newlines()?;
        let token = self.next(LexMode::Statement)?;
        let else_flow = if token.is(TokenKind::Else) {
            let flow = self.parse_branch(exec && !taken)?;
            if matches!(flow, Flow::Return(_)) {
                return Ok(flow);
            }
            Some(flow)
        } else {
            self.push_back(token);
            None
        };

        if !exec {
            return Ok(Flow::Empty);
        }
        let executed = if taken { Some(then_flow) } else { else_flow };
        Ok(match executed {
            Some(flow @ Flow::Value(_)) => flow,
            _ => Flow::Value(cond),
        })
    }

    /// `for (init; cond; incr) statement`, with `for` already read.
    ///
    /// The first pass parses every part once, executing the body only if
    /// the condition holds. Each further iteration restores and re-lexes
    /// the increment, the condition and then the body. Afterwards the input
    /// resumes just past the body. The result is the final condition.
    pub(crate) fn parse_for(&mut self, exec: bool) -> Result<Flow, EjsError> {
        self.expect(TokenKind::LParen)?;

        let token = self.next(LexMode::Statement)?;
        match token.kind {
            TokenKind::Semicolon => {}
            TokenKind::Var => {
                self.parse_declarations(exec)?;
                self.expect(TokenKind::Semicolon)?;
            }
            _ => {
                self.push_back(token);
                self.parse_simple(exec)?;
                self.expect(TokenKind::Semicolon)?;
            }
        }

        let cond_at = self.input.snapshot();
        let mut cond = self.parse_condition(exec)?;
        self.expect(TokenKind::Semicolon)?;

        let incr_at = self.input.snapshot();
        let token = self.next(LexMode::Expression)?;
        let has_increment = !token.is(TokenKind::RParen);
        self.push_back(token);
        if has_increment {
            self.parse_simple(false)?;
        }
        self.expect_close(TokenKind::RParen, ")")?;

        let body_at = self.input.snapshot();
        let mut running = exec && is_truthy(&cond);
        let flow = self.parse_branch(running)?;
        if matches!(flow, Flow::Return(_)) {
            return Ok(flow);
        }
        let end_at = self.input.snapshot();

        let mut iterations: u64 = u64::from(running);
        while running {
            if has_increment {
                self.input.restore(&incr_at);
                self.parse_simple(true)?;
            }

            self.input.restore(&cond_at);
            cond = self.parse_condition(true)?;
            running = is_truthy(&cond);
            if !running {
                break;
            }

            self.input.restore(&body_at);
            let flow = self.parse_branch(true)?;
            if matches!(flow, Flow::Return(_)) {
                return Ok(flow);
            }
            iterations += 1;
        }

        self.input.restore(&end_at);
        if exec {
            debug!(iterations, "for loop finished");
        }
        Ok(Flow::value(cond, exec))
    }
}
