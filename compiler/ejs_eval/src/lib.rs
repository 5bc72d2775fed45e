//! Single-pass parser and evaluator for Ejscript.
//!
//! Ejscript is a small JavaScript-like language for embedding in hosts such
//! as web servers. Scripts are strings in, strings out: every value is a
//! string, and arithmetic applies only when both operands are digit runs.
//!
//! Evaluation never builds a syntax tree. The recursive-descent productions
//! in `exec` read tokens and act on them immediately; loops replay their
//! source through lexer snapshots.
//!
//! ```text
//! let mut interp = Interpreter::new();
//! interp.register_function("twice", |_: &mut Interpreter, _: Option<&(dyn Any + Send + Sync)>, args: &[String]| {
//!     Ok(format!("{0}{0}", args.first().map_or("", String::as_str)))
//! });
//! assert_eq!(interp.eval_block("twice("ab") + 1")?, "abab1");
//! ```

mod environment;
pub mod errors;
mod exec;
mod function_table;
mod interpreter;
pub mod operators;
mod registry;

pub use environment::{FrameId, Scope, ScopeStack, VarValue};
pub use function_table::{FunctionTable, HostContext, NativeFunction, SharedFunctionTable};
pub use interpreter::{
    CallFrame, EvalConfig, Interpreter, InterpreterBuilder, ScopedInterpreter,
    DEFAULT_STALL_LIMIT,
};
pub use registry::{InstanceId, InterpreterRegistry};

pub use ejs_diagnostic::{EjsError, EjsResult, ErrorCategory, ErrorCode};
