//! Command handlers for the `ejs` CLI.
//!
//! Each submodule implements one command. Shared helpers for reading
//! input and rendering engine errors live here in the module root.

mod debug;
mod explain;
mod run;

use std::ops::Range;

use ariadne::{Color, Label, Report, ReportKind, Source};
use ejs_diagnostic::EjsError;

pub use debug::{format_tokens, lex_file};
pub use explain::{explain_error, explain_text};
pub use run::{eval_inline, parse_define, run_file, run_source, RunOptions};

/// Read a script, exiting with a readable message if it cannot be read.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Byte range to the character range ariadne labels with.
fn char_range(source: &str, bytes: Range<usize>) -> Range<usize> {
    let clamp = |offset: usize| {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        source[..offset].chars().count()
    };
    clamp(bytes.start)..clamp(bytes.end)
}

/// Print `err` against `source` to stderr.
///
/// Errors without a location fall back to the plain message.
pub fn report_error(name: &str, source: &str, err: &EjsError) {
    let Some(span) = err.span() else {
        eprintln!("error[{}]: {}", err.code, err.message);
        return;
    };

    let range = char_range(source, span.to_range());
    let report = Report::build(ReportKind::Error, name, range.start)
        .with_code(err.code.as_str())
        .with_message(&err.message)
        .with_label(
            Label::new((name, range))
                .with_message(err.code.description())
                .with_color(Color::Red),
        )
        .finish();
    if report.eprint((name, Source::from(source))).is_err() {
        eprintln!("{}", err.report());
    }
}

#[cfg(test)]
mod tests;
