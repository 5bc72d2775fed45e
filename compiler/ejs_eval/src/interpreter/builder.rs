//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use ejs_lexer::Lexer;
use ejs_stack::{DepthBudget, DEFAULT_MAX_DEPTH};

use super::Interpreter;
use crate::environment::{Scope, ScopeStack};
use crate::function_table::{HostContext, SharedFunctionTable};

/// Default number of non-advancing top-level parses tolerated.
pub const DEFAULT_STALL_LIMIT: usize = 10;

/// Evaluation limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum nesting of statements, expressions and native calls.
    pub max_depth: usize,
    /// Consecutive top-level parses that may leave the input offset
    /// unchanged before evaluation aborts.
    pub stall_limit: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            stall_limit: DEFAULT_STALL_LIMIT,
        }
    }
}

/// Builder for creating Interpreter instances.
///
/// Without a function table the interpreter gets a private one. Passing a
/// [`SharedFunctionTable`] makes host registrations visible to every
/// interpreter built from it.
#[derive(Default)]
pub struct InterpreterBuilder {
    globals: Option<Scope>,
    functions: Option<SharedFunctionTable>,
    host: Option<HostContext>,
    config: EvalConfig,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing global variable table.
    #[must_use]
    pub fn globals(mut self, globals: Scope) -> Self {
        self.globals = Some(globals);
        self
    }

    /// Share a function table with the host.
    #[must_use]
    pub fn functions(mut self, functions: SharedFunctionTable) -> Self {
        self.functions = Some(functions);
        self
    }

    #[must_use]
    pub fn host_context(mut self, host: HostContext) -> Self {
        self.host = Some(host);
        self
    }

    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn stall_limit(mut self, stall_limit: usize) -> Self {
        self.config.stall_limit = stall_limit;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            input: Lexer::open(""),
            functions: self.functions.unwrap_or_default(),
            scopes: ScopeStack::new(self.globals.unwrap_or_default()),
            result: String::new(),
            error: None,
            host: self.host,
            call: None,
            depth: DepthBudget::new(self.config.max_depth),
            config: self.config,
        }
    }
}
