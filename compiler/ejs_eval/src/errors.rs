//! Centralized error constructors for the evaluator.
//!
//! Constructors build location-free errors. The evaluation entry point
//! attaches the lexer position before handing the error to the host.

use ejs_diagnostic::{EjsError, ErrorCode};
use ejs_lexer::{BinaryOp, Token, TokenKind};

// Syntax Errors

#[cold]
pub fn unexpected_token(found: &Token) -> EjsError {
    EjsError::new(
        ErrorCode::E1001,
        format!("Syntax error: unexpected {}", found.kind.describe()),
    )
}

#[cold]
pub fn expected_token(expected: TokenKind, found: &Token) -> EjsError {
    EjsError::new(
        ErrorCode::E1001,
        format!(
            "Syntax error: expected {}, found {}",
            expected.describe(),
            found.kind.describe()
        ),
    )
}

#[cold]
pub fn missing_delimiter(delimiter: &str) -> EjsError {
    EjsError::new(ErrorCode::E1002, format!("Missing closing `{delimiter}`"))
}

#[cold]
pub fn expected_identifier(found: &Token) -> EjsError {
    EjsError::new(
        ErrorCode::E1003,
        format!("Expected identifier, found {}", found.kind.describe()),
    )
}

/// The synthetic error raised when the top level stops advancing.
#[cold]
pub fn no_progress() -> EjsError {
    EjsError::new(ErrorCode::E1004, "Syntax error")
}

// Runtime Errors

#[cold]
pub fn undefined_variable(name: &str) -> EjsError {
    EjsError::new(ErrorCode::E6001, format!("Undefined variable \"{name}\""))
}

#[cold]
pub fn already_declared(name: &str) -> EjsError {
    EjsError::new(ErrorCode::E6002, format!("Variable already declared \"{name}\""))
}

#[cold]
pub fn undefined_function(name: &str) -> EjsError {
    EjsError::new(ErrorCode::E6003, format!("Undefined procedure \"{name}\""))
}

#[cold]
pub fn conditional_not_numeric() -> EjsError {
    EjsError::new(ErrorCode::E6004, "Conditional must be numeric")
}

#[cold]
pub fn bad_operator(op: BinaryOp) -> EjsError {
    EjsError::new(ErrorCode::E6005, format!("Bad operator {}", op.as_str()))
}

/// For native functions that want to fail the evaluation.
#[cold]
pub fn native_function_failed(name: &str, reason: &str) -> EjsError {
    EjsError::new(ErrorCode::E6006, format!("{name}: {reason}"))
}

#[cold]
pub fn invalid_frame(frame: usize, current: usize) -> EjsError {
    EjsError::new(
        ErrorCode::E6007,
        format!("Cannot close scope frame {frame}; frame {current} is innermost"),
    )
}

#[cold]
pub fn invalid_handle() -> EjsError {
    EjsError::new(ErrorCode::E6008, "Invalid interpreter handle")
}

// Resource Errors

#[cold]
pub fn recursion_limit(limit: usize) -> EjsError {
    EjsError::new(
        ErrorCode::E7001,
        format!("Recursion limit of {limit} exceeded"),
    )
}

#[cold]
pub fn too_many_instances(limit: usize) -> EjsError {
    EjsError::new(
        ErrorCode::E7002,
        format!("Too many interpreter instances (limit {limit})"),
    )
}
