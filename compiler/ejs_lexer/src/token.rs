//! Token types.

use std::fmt;

use ejs_diagnostic::Span;

/// Controls whether reserved words are recognized.
///
/// Statements start in `Statement` mode so `if`, `else`, `var`, `for` and
/// `return` come back as keywords. Everywhere inside an expression the
/// lexer runs in `Expression` mode and every word is an identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LexMode {
    Statement,
    Expression,
}

/// Binary (and the one unary) operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Shl,
    Shr,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    /// Boolean complement. Folds as `0 ! rhs`.
    Not,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Not => "!",
        }
    }

    /// Comparison operators yield `"1"` or `"0"`.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Eq | BinaryOp::Ne | BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IncDecOp {
    Inc,
    Dec,
}

impl IncDecOp {
    pub fn as_str(self) -> &'static str {
        match self {
            IncDecOp::Inc => "++",
            IncDecOp::Dec => "--",
        }
    }

    /// `+1` or `-1`.
    pub fn delta(self) -> i64 {
        match self {
            IncDecOp::Inc => 1,
            IncDecOp::Dec => -1,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn as_str(self) -> &'static str {
        match self {
            LogicalOp::And => "&&",
            LogicalOp::Or => "||",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,
    Newline,
    Semicolon,
    Comma,
    LParen,
    RParen,
    LBrace,
    RBrace,
    /// `=`
    Assign,
    Operator(BinaryOp),
    IncDec(IncDecOp),
    Logical(LogicalOp),
    /// Quoted string. The token text holds the unescaped content.
    Literal,
    /// Unsigned digit run.
    Number,
    Identifier,
    /// Identifier directly followed by `(`.
    FunctionName,
    If,
    Else,
    Var,
    For,
    Return,
}

impl TokenKind {
    /// Resolve a reserved word. Only consulted in [`LexMode::Statement`].
    pub(crate) fn keyword(text: &str) -> Option<TokenKind> {
        match text {
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "var" => Some(TokenKind::Var),
            "for" => Some(TokenKind::For),
            "return" => Some(TokenKind::Return),
            _ => None,
        }
    }

    /// Short description for "expected X, found Y" messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Eof => "end of input",
            TokenKind::Newline => "newline",
            TokenKind::Semicolon => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Assign => "`=`",
            TokenKind::Operator(_) => "operator",
            TokenKind::IncDec(_) => "increment operator",
            TokenKind::Logical(_) => "logical operator",
            TokenKind::Literal => "string literal",
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::FunctionName => "function name",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::Var => "`var`",
            TokenKind::For => "`for`",
            TokenKind::Return => "`return`",
        }
    }
}

/// A classified token with its text and source span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("<eof>"),
            TokenKind::Newline => f.write_str("\\n"),
            TokenKind::Literal => write!(f, "{:?}", self.text),
            _ => f.write_str(&self.text),
        }
    }
}

#[cfg(test)]
mod tests;
