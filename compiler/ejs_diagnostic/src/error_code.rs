//! Error codes for all engine diagnostics.
//!
//! Each code is a unique identifier (e.g., `E1001`) whose first digit names
//! the stage that detected the problem. Hosts can match on codes instead of
//! parsing message text.

use std::fmt;

/// Broad error class, matching how a host is expected to react.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCategory {
    /// The script text is malformed (lexical or grammatical).
    Syntax,
    /// The script is well formed but failed while executing.
    Runtime,
    /// The engine ran out of a bounded resource.
    Resource,
}

/// Error codes for all engine diagnostics.
///
/// Format: E#### where the first digit indicates the stage:
/// - E0xxx: Lexer errors
/// - E1xxx: Syntax errors
/// - E6xxx: Runtime errors
/// - E7xxx: Resource errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unterminated block comment
    E0002,
    /// Invalid escape sequence in a string literal
    E0003,
    /// Character that cannot start any token
    E0004,

    // Syntax Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Missing closing delimiter
    E1002,
    /// Expected an identifier
    E1003,
    /// Parser stopped making progress
    E1004,

    // Runtime Errors (E6xxx)
    /// Read of an undefined variable
    E6001,
    /// Redeclaration of a variable in the same scope
    E6002,
    /// Call of an unregistered native function
    E6003,
    /// Non-numeric operand to `&&` or `||`
    E6004,
    /// Operator not applicable to its operands
    E6005,
    /// Native function reported failure
    E6006,
    /// Scope frame closed out of order or not open
    E6007,
    /// Interpreter handle is stale or was never issued
    E6008,

    // Resource Errors (E7xxx)
    /// Evaluation nesting exceeded the configured depth
    E7001,
    /// Instance table cannot grow any further
    E7002,
}

impl ErrorCode {
    /// The code as it appears in messages, e.g. `"E1001"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E7001 => "E7001",
            ErrorCode::E7002 => "E7002",
        }
    }

    /// One-line description used by `ejs explain`-style tooling.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "unterminated block comment",
            ErrorCode::E0003 => "invalid escape sequence",
            ErrorCode::E0004 => "invalid identifier or character",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "missing closing delimiter",
            ErrorCode::E1003 => "expected identifier",
            ErrorCode::E1004 => "parser made no progress",
            ErrorCode::E6001 => "undefined variable",
            ErrorCode::E6002 => "variable already declared",
            ErrorCode::E6003 => "undefined native function",
            ErrorCode::E6004 => "conditional must be numeric",
            ErrorCode::E6005 => "bad operator",
            ErrorCode::E6006 => "native function failed",
            ErrorCode::E6007 => "invalid scope frame",
            ErrorCode::E6008 => "invalid interpreter handle",
            ErrorCode::E7001 => "recursion limit exceeded",
            ErrorCode::E7002 => "instance table exhausted",
        }
    }

    /// Which broad class this code belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::E0001
            | ErrorCode::E0002
            | ErrorCode::E0003
            | ErrorCode::E0004
            | ErrorCode::E1001
            | ErrorCode::E1002
            | ErrorCode::E1003
            | ErrorCode::E1004 => ErrorCategory::Syntax,
            ErrorCode::E6001
            | ErrorCode::E6002
            | ErrorCode::E6003
            | ErrorCode::E6004
            | ErrorCode::E6005
            | ErrorCode::E6006
            | ErrorCode::E6007
            | ErrorCode::E6008 => ErrorCategory::Runtime,
            ErrorCode::E7001 | ErrorCode::E7002 => ErrorCategory::Resource,
        }
    }

    /// Check if this code was raised by the lexer.
    pub fn is_lexer_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003 | ErrorCode::E0004
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CODES
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or(())
    }
}

/// Every code, in numeric order.
pub(crate) const ALL_CODES: &[ErrorCode] = &[
    ErrorCode::E0001,
    ErrorCode::E0002,
    ErrorCode::E0003,
    ErrorCode::E0004,
    ErrorCode::E1001,
    ErrorCode::E1002,
    ErrorCode::E1003,
    ErrorCode::E1004,
    ErrorCode::E6001,
    ErrorCode::E6002,
    ErrorCode::E6003,
    ErrorCode::E6004,
    ErrorCode::E6005,
    ErrorCode::E6006,
    ErrorCode::E6007,
    ErrorCode::E6008,
    ErrorCode::E7001,
    ErrorCode::E7002,
];
