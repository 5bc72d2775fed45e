//! Error reporting for the Ejscript engine.
//!
//! Every failure in the lexer, the evaluator or the instance registry is an
//! [`EjsError`]: a stable [`ErrorCode`], a human-readable message, and the
//! source position where the problem was detected. Errors travel up the
//! recursive productions as ordinary `Result`s; only the outermost
//! evaluation call hands them to the host.

mod error;
mod error_code;

pub use error::{EjsError, SourceLocation, Span};
pub use error_code::{ErrorCategory, ErrorCode};

/// Result alias used across the engine crates.
pub type EjsResult<T> = Result<T, EjsError>;
