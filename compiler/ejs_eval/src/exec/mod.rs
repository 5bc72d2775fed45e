//! The grammar productions.
//!
//! There is no syntax tree. Each production reads tokens straight from the
//! interpreter's input and, when `exec` is true, performs its effect and
//! returns the resulting string. With `exec` false the same tokens are
//! consumed but nothing is read, written or called, and the result is `""`.
//! Untaken `if` branches and the first pass over a `for` increment run in
//! that mode.
//!
//! Grammar, loosely:
//!
//! ```text
//! statement   = ";" | block | if | for | "var" decls term | "return" [relexp] term
//!             | simple term
//! simple      = ident "=" relexp | ident ("++" | "--") fold | relexp
//! relexp      = term { op term | "++" term | logical relexp }
//! term        = number | literal | ident ["++" | "--"] | call | "(" relexp ")"
//!             | ("-" | "!") term
//! call        = fname "(" [relexp { "," relexp }] ")"
//! ```

mod call;
mod control;
mod declaration;
mod expr;
mod statement;

use ejs_diagnostic::EjsError;
use ejs_lexer::{LexMode, Token, TokenKind};
use ejs_stack::ensure_sufficient_stack;

use crate::{errors, Interpreter};

/// How a statement finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Completed with a result.
    Value(String),
    /// Completed without producing a result (`;`, or not executing).
    Empty,
    /// Found a `}`; it has been pushed back for the enclosing block.
    BlockEnd,
    Eof,
    /// An executed `return`. The rest of the input has been discarded.
    Return(String),
}

impl Flow {
    /// `Value(v)` when executing, `Empty` otherwise.
    pub(crate) fn value(v: String, exec: bool) -> Flow {
        if exec {
            Flow::Value(v)
        } else {
            Flow::Empty
        }
    }
}

impl Interpreter {
    #[inline]
    pub(crate) fn next(&mut self, mode: LexMode) -> Result<Token, EjsError> {
        self.input.next_token(mode)
    }

    #[inline]
    pub(crate) fn push_back(&mut self, token: Token) {
        self.input.push_back(token);
    }

    /// Read one token and require it to be `kind`.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, EjsError> {
        let token = self.next(LexMode::Expression)?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(errors::expected_token(kind, &token))
        }
    }

    /// Read one token and require it to close a construct.
    pub(crate) fn expect_close(&mut self, kind: TokenKind, text: &str) -> Result<(), EjsError> {
        let token = self.next(LexMode::Expression)?;
        if token.kind == kind {
            Ok(())
        } else {
            Err(errors::missing_delimiter(text))
        }
    }

    /// Run `f` one nesting level deeper.
    ///
    /// Fails with a resource error once the configured depth is reached and
    /// grows the native stack when it runs low.
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, EjsError>,
    ) -> Result<T, EjsError> {
        let mut deeper = self.enter_nested()?;
        ensure_sufficient_stack(|| f(&mut *deeper))
    }

    /// Evaluate statements until end of input, returning the last result.
    ///
    /// A parse that leaves the lexer offset where it was counts as a stall;
    /// too many stalls in a row abort with a syntax error. A stray `}` at
    /// this level is the usual cause: it is pushed back on every parse.
    pub(crate) fn run_statements(&mut self) -> Result<String, EjsError> {
        let mut last = String::new();
        let mut offset = self.input.offset();
        let mut stalls = 0;
        loop {
            match self.parse_statement(true)? {
                Flow::Value(v) => last = v,
                Flow::Empty | Flow::BlockEnd => {}
                Flow::Eof => return Ok(last),
                Flow::Return(v) => return Ok(v),
            }
            let now = self.input.offset();
            if now == offset {
                stalls += 1;
                if stalls >= self.config.stall_limit {
                    return Err(errors::no_progress());
                }
            } else {
                stalls = 0;
                offset = now;
            }
        }
    }
}
