//! Native function calls.

use smallvec::SmallVec;

use ejs_diagnostic::EjsError;
use ejs_lexer::{LexMode, TokenKind};
use tracing::debug;

use crate::{errors, CallFrame, Interpreter};

/// Evaluated call arguments. Most calls pass only a handful.
type Args = SmallVec<[String; 4]>;

impl Interpreter {
    /// `name(args)`, with the function name already read.
    ///
    /// The function is looked up when the call executes, so bindings made
    /// after the script was opened are honored. When not executing, the
    /// arguments are parsed and nothing is called.
    pub(crate) fn parse_call(&mut self, name: &str, exec: bool) -> Result<String, EjsError> {
        self.expect(TokenKind::LParen)?;
        let args = self.parse_arguments(exec)?;
        if !exec {
            return Ok(String::new());
        }

        let Some(function) = self.functions.lookup(name) else {
            return Err(errors::undefined_function(name));
        };
        debug!(name, argc = args.len(), "native call");

        let host = self.host.clone();
        let mut call = self.enter_call(CallFrame {
            name: name.to_string(),
            argc: args.len(),
        });
        call.nested(|this| function.call(this, host.as_deref(), &args))
    }

    /// `[relexp { , relexp }] )`, with the `(` already read.
    fn parse_arguments(&mut self, exec: bool) -> Result<Args, EjsError> {
        let mut args = Args::new();
        let token = self.next(LexMode::Expression)?;
        if token.is(TokenKind::RParen) {
            return Ok(args);
        }
        self.push_back(token);

        loop {
            args.push(self.parse_rel_expr(exec)?);
            let token = self.next(LexMode::Expression)?;
            match token.kind {
                TokenKind::Comma => {}
                TokenKind::RParen => return Ok(args),
                _ => return Err(errors::missing_delimiter(")")),
            }
        }
    }
}
