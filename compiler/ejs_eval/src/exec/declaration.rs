//! `var` declarations and assignment.

use ejs_diagnostic::EjsError;
use ejs_lexer::{LexMode, TokenKind};
use tracing::trace;

use crate::environment::VarValue;
use crate::{errors, Interpreter};

impl Interpreter {
    /// `name = relexp`, with `name =` already read.
    ///
    /// Writes the current frame if it binds `name`, otherwise the global
    /// frame. Yields the assigned value.
    pub(crate) fn parse_assignment(&mut self, name: &str, exec: bool) -> Result<String, EjsError> {
        let value = self.parse_rel_expr(exec)?;
        if exec {
            trace!(name, value = value.as_str(), "assign");
            self.scopes.assign(name, value.clone());
        }
        Ok(value)
    }

    /// `name [= relexp] { , name [= relexp] }` after `var`.
    ///
    /// Always binds in the current frame. Yields the last assigned value.
    pub(crate) fn parse_declarations(&mut self, exec: bool) -> Result<String, EjsError> {
        let mut last = String::new();
        loop {
            let name = self.next(LexMode::Expression)?;
            if !name.is(TokenKind::Identifier) {
                return Err(errors::expected_identifier(&name));
            }

            let follow = self.next(LexMode::Expression)?;
            if follow.is(TokenKind::Assign) {
                let value = self.parse_rel_expr(exec)?;
                if exec {
                    self.scopes
                        .define_local(&name.text, VarValue::Defined(value.clone()));
                }
                last = value;
            } else {
                self.push_back(follow);
                if exec {
                    if self.scopes.current().contains(&name.text) {
                        return Err(errors::already_declared(&name.text));
                    }
                    self.scopes.define_local(&name.text, VarValue::Undefined);
                }
            }

            let separator = self.next(LexMode::Expression)?;
            if !separator.is(TokenKind::Comma) {
                self.push_back(separator);
                return Ok(last);
            }
        }
    }
}
