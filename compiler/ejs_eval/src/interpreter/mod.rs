//! The interpreter instance.
//!
//! An [`Interpreter`] owns one input context, a stack of variable frames,
//! a (possibly shared) native function table, the opaque host context and
//! the outcome of the last evaluation. It is `Send` but evaluation needs
//! `&mut self`, so one instance serves one thread at a time.

mod builder;
mod scope_guard;

use std::any::Any;
use std::fmt;
use std::mem;
use std::sync::Arc;

use ejs_diagnostic::EjsError;
use ejs_lexer::Lexer;
use ejs_stack::DepthBudget;

pub use builder::{EvalConfig, InterpreterBuilder, DEFAULT_STALL_LIMIT};
pub use scope_guard::ScopedInterpreter;

use crate::environment::{FrameId, Scope, ScopeStack, VarValue};
use crate::function_table::{HostContext, NativeFunction, SharedFunctionTable};

/// The native call currently executing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    pub name: String,
    pub argc: usize,
}

pub struct Interpreter {
    /// Active input. A nested evaluation swaps in its own and restores
    /// this one when it finishes.
    pub(crate) input: Lexer,
    pub(crate) functions: SharedFunctionTable,
    pub(crate) scopes: ScopeStack,
    result: String,
    error: Option<EjsError>,
    pub(crate) host: Option<HostContext>,
    pub(crate) call: Option<CallFrame>,
    pub(crate) depth: DepthBudget,
    pub(crate) config: EvalConfig,
}

impl Interpreter {
    /// An interpreter with empty globals and a private function table.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Evaluate `script` against the current frames.
    ///
    /// Returns the result of the last statement, or of an executed
    /// `return`. On failure the result is cleared and the error, with the
    /// line it was detected on, is both returned and kept for
    /// [`error`](Self::error).
    ///
    /// Native functions may call this re-entrantly; the outer script
    /// resumes where it left off.
    #[tracing::instrument(level = "debug", skip_all, fields(len = script.len()))]
    pub fn eval(&mut self, script: &str) -> Result<String, EjsError> {
        let nested = self.depth.depth() > 0;
        let outer = mem::replace(&mut self.input, Lexer::open(script));
        let outcome = self
            .run_statements()
            .map_err(|err| err.with_location(self.input.location()));
        if nested {
            self.input = outer;
        }

        match outcome {
            Ok(value) => {
                self.result.clone_from(&value);
                self.error = None;
                Ok(value)
            }
            Err(err) => {
                tracing::debug!(code = %err.code, line = err.line(), "evaluation failed");
                self.result.clear();
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Evaluate `script` inside a fresh local frame.
    ///
    /// `var` declarations land in the new frame and vanish with it; plain
    /// assignments to names the frame does not bind write the globals.
    pub fn eval_block(&mut self, script: &str) -> Result<String, EjsError> {
        let mut scoped = self.scoped();
        scoped.eval(script)
    }

    // Variables

    pub fn set_global_variable(&mut self, name: &str, value: impl Into<String>) {
        self.scopes.global_mut().set(name, value);
    }

    /// Bind `name` in the current frame.
    pub fn set_local_variable(&mut self, name: &str, value: impl Into<String>) {
        self.scopes
            .define_local(name, VarValue::Defined(value.into()));
    }

    /// Assign as a script would: the current frame if it binds `name`,
    /// otherwise the globals.
    pub fn set_variable(&mut self, name: &str, value: impl Into<String>) {
        self.scopes.assign(name, value.into());
    }

    /// Value of `name` as seen from the current frame. Declared but
    /// undefined variables give `None`.
    pub fn get_variable(&self, name: &str) -> Option<&str> {
        self.scopes.lookup(name).and_then(VarValue::as_str)
    }

    /// Whether `name` is bound in the current or global frame.
    pub fn is_declared(&self, name: &str) -> bool {
        self.scopes.lookup(name).is_some()
    }

    pub fn globals(&self) -> &Scope {
        self.scopes.global()
    }

    pub fn scopes(&self) -> &ScopeStack {
        &self.scopes
    }

    // Blocks

    /// Open a local frame. Close it with [`close_block`](Self::close_block)
    /// in reverse order of opening.
    pub fn open_block(&mut self) -> FrameId {
        let frame = self.scopes.push();
        tracing::trace!(frame = frame.index(), "block opened");
        frame
    }

    pub fn close_block(&mut self, frame: FrameId) -> Result<Scope, EjsError> {
        let scope = self.scopes.pop(frame)?;
        tracing::trace!(frame = frame.index(), "block closed");
        Ok(scope)
    }

    // Functions

    pub fn register_function(&mut self, name: &str, function: impl NativeFunction + 'static) {
        self.functions.write().register(name, function);
    }

    pub fn unregister_function(&mut self, name: &str) -> bool {
        self.functions.write().unregister(name)
    }

    pub fn lookup_function(&self, name: &str) -> Option<Arc<dyn NativeFunction>> {
        self.functions.lookup(name)
    }

    pub fn functions(&self) -> &SharedFunctionTable {
        &self.functions
    }

    // Host context

    pub fn set_host_context(&mut self, host: HostContext) {
        self.host = Some(host);
    }

    pub fn clear_host_context(&mut self) -> Option<HostContext> {
        self.host.take()
    }

    pub fn host_context(&self) -> Option<&(dyn Any + Send + Sync)> {
        self.host.as_deref()
    }

    /// The host context downcast to `T`.
    pub fn host_context_as<T: Any>(&self) -> Option<&T> {
        self.host_context()?.downcast_ref::<T>()
    }

    // Outcome

    /// Result of the last successful evaluation; empty after a failure.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Error of the last evaluation, if it failed.
    pub fn error(&self) -> Option<&EjsError> {
        self.error.as_ref()
    }

    /// Line the input is on: the line being evaluated during a native
    /// call, or where the last evaluation stopped.
    pub fn line_number(&self) -> u32 {
        self.input.line()
    }

    /// Name of the native function currently being called.
    pub fn current_function(&self) -> Option<&str> {
        self.call.as_ref().map(|frame| frame.name.as_str())
    }

    pub fn call_frame(&self) -> Option<&CallFrame> {
        self.call.as_ref()
    }

    pub fn config(&self) -> EvalConfig {
        self.config
    }

    /// Tear down the instance, handing the global frame back to the host.
    pub fn close(self) -> Scope {
        self.scopes.into_global()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpreter")
            .field("scopes", &self.scopes)
            .field("functions", &self.functions)
            .field("result", &self.result)
            .field("error", &self.error)
            .field("has_host", &self.host.is_some())
            .field("call", &self.call)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
