//! Expressions: terms and the flat left-to-right operator fold.
//!
//! There is no precedence. `1 + 2 * 3` is `(1 + 2) * 3`.

use ejs_diagnostic::EjsError;
use ejs_lexer::{BinaryOp, IncDecOp, LexMode, TokenKind};

use crate::environment::VarValue;
use crate::operators::{evaluate_binary, evaluate_condition};
use crate::{errors, Interpreter};

/// `value + 1` or `value - 1` under the usual operator rules.
fn step(value: &str, op: IncDecOp) -> Result<String, EjsError> {
    let binary = match op {
        IncDecOp::Inc => BinaryOp::Add,
        IncDecOp::Dec => BinaryOp::Sub,
    };
    evaluate_binary(value, binary, "1")
}

impl Interpreter {
    /// A whole relational expression.
    pub(crate) fn parse_rel_expr(&mut self, exec: bool) -> Result<String, EjsError> {
        self.nested(|this| {
            let lhs = this.parse_term(exec)?;
            this.fold(lhs, exec)
        })
    }

    /// The body of an expression statement: an assignment, an increment, or
    /// a relational expression. No terminator is consumed.
    pub(crate) fn parse_simple(&mut self, exec: bool) -> Result<String, EjsError> {
        let token = self.next(LexMode::Expression)?;
        if !token.is(TokenKind::Identifier) {
            self.push_back(token);
            return self.parse_rel_expr(exec);
        }

        let follow = self.next(LexMode::Expression)?;
        match follow.kind {
            TokenKind::Assign => self.parse_assignment(&token.text, exec),
            TokenKind::IncDec(op) => {
                let lhs = self.increment(&token.text, op, exec)?;
                self.fold(lhs, exec)
            }
            _ => {
                self.push_back(follow);
                let lhs = self.read_variable(&token.text, exec)?;
                self.fold(lhs, exec)
            }
        }
    }

    fn parse_term(&mut self, exec: bool) -> Result<String, EjsError> {
        let token = self.next(LexMode::Expression)?;
        match token.kind {
            TokenKind::Number | TokenKind::Literal => {
                Ok(if exec { token.text } else { String::new() })
            }
            TokenKind::Identifier => {
                let follow = self.next(LexMode::Expression)?;
                if let TokenKind::IncDec(op) = follow.kind {
                    return self.increment(&token.text, op, exec);
                }
                self.push_back(follow);
                self.read_variable(&token.text, exec)
            }
            TokenKind::FunctionName => self.parse_call(&token.text, exec),
            TokenKind::LParen => {
                let value = self.parse_rel_expr(exec)?;
                self.expect_close(TokenKind::RParen, ")")?;
                Ok(value)
            }
            // A leading `-` or `!` folds against an implicit zero.
            TokenKind::Operator(op @ (BinaryOp::Sub | BinaryOp::Not)) => {
                let operand = self.nested(|this| this.parse_term(exec))?;
                if exec {
                    evaluate_binary("0", op, &operand)
                } else {
                    Ok(String::new())
                }
            }
            _ => Err(errors::unexpected_token(&token)),
        }
    }

    /// Fold operators and terms onto `lhs` until something else turns up.
    ///
    /// `&&` and `||` take the rest of the expression as their right side.
    /// A `++`/`--` in operator position steps `lhs` and discards the term
    /// that follows it.
    pub(crate) fn fold(&mut self, mut lhs: String, exec: bool) -> Result<String, EjsError> {
        loop {
            let token = self.next(LexMode::Expression)?;
            match token.kind {
                TokenKind::Operator(op) => {
                    let rhs = self.parse_term(exec)?;
                    if exec {
                        lhs = evaluate_binary(&lhs, op, &rhs)?;
                    }
                }
                TokenKind::IncDec(op) => {
                    self.parse_term(exec)?;
                    if exec {
                        lhs = step(&lhs, op)?;
                    }
                }
                TokenKind::Logical(op) => {
                    let rhs = self.parse_rel_expr(exec)?;
                    if exec {
                        lhs = evaluate_condition(&lhs, op, &rhs)?;
                    }
                    return Ok(lhs);
                }
                _ => {
                    self.push_back(token);
                    return Ok(lhs);
                }
            }
        }
    }

    /// Read a variable. Declared but undefined variables read as `""`.
    fn read_variable(&self, name: &str, exec: bool) -> Result<String, EjsError> {
        if !exec {
            return Ok(String::new());
        }
        self.scopes
            .lookup(name)
            .map(VarValue::to_script_string)
            .ok_or_else(|| errors::undefined_variable(name))
    }

    /// `name++` / `name--`: update the variable where it is bound and
    /// yield the new value.
    fn increment(&mut self, name: &str, op: IncDecOp, exec: bool) -> Result<String, EjsError> {
        if !exec {
            return Ok(String::new());
        }
        let Some(slot) = self.scopes.lookup_mut(name) else {
            return Err(errors::undefined_variable(name));
        };
        let next = step(&slot.to_script_string(), op)?;
        *slot = VarValue::Defined(next.clone());
        Ok(next)
    }
}
