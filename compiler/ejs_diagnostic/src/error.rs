//! The engine error type.

use std::fmt::Write as _;

use crate::error_code::{ErrorCategory, ErrorCode};

/// Half-open byte range into the script source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Build a span from `usize` offsets, saturating at `u32::MAX`.
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        let clamp = |v: usize| u32::try_from(v).unwrap_or(u32::MAX);
        Span::new(clamp(range.start), clamp(range.end))
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

/// Where in the script an error was detected.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SourceLocation {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column, counted in bytes.
    pub column: u32,
    pub span: Span,
    /// The full source line containing the error, without its newline.
    pub line_text: String,
}

/// An error raised while lexing, parsing or executing a script.
///
/// The `Display` form is the bare message. Use [`EjsError::report`] for the
/// multi-line form that includes the offending source line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EjsError {
    pub code: ErrorCode,
    pub message: String,
    pub location: Option<SourceLocation>,
}

impl EjsError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        EjsError {
            code,
            message: message.into(),
            location: None,
        }
    }

    /// Attach a location unless one is already present.
    ///
    /// The innermost production that fails records the position first, so
    /// outer frames never overwrite it.
    #[must_use]
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        if self.location.is_none() {
            self.location = Some(location);
        }
        self
    }

    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    /// Line number of the error, or 0 when no location was recorded.
    pub fn line(&self) -> u32 {
        self.location.as_ref().map_or(0, |loc| loc.line)
    }

    pub fn span(&self) -> Option<Span> {
        self.location.as_ref().map(|loc| loc.span)
    }

    /// Render the message together with the line it refers to.
    ///
    /// ```text
    /// Undefined variable
    ///  At line 3, line =>
    ///
    /// y = x + 1;
    /// ```
    pub fn report(&self) -> String {
        let mut out = self.message.clone();
        if let Some(loc) = &self.location {
            let _ = write!(
                out,
                "\n At line {}, line => \n\n{}\n",
                loc.line, loc.line_text
            );
        }
        out
    }
}

#[cfg(test)]
mod tests;
