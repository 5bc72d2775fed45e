//! The `explain` command: describe an error code.

use ejs_diagnostic::{ErrorCategory, ErrorCode};

/// Text shown for `code_str`, or `None` if it is not a known code.
pub fn explain_text(code_str: &str) -> Option<String> {
    let code = code_str.parse::<ErrorCode>().ok()?;
    let category = match code.category() {
        ErrorCategory::Syntax => "syntax",
        ErrorCategory::Runtime => "runtime",
        ErrorCategory::Resource => "resource",
    };
    Some(format!("{code}: {} ({category} error)", code.description()))
}

/// Print documentation for an error code.
pub fn explain_error(code_str: &str) {
    let Some(text) = explain_text(code_str) else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0001, E1001, E6001");
        std::process::exit(1);
    };
    println!("{text}");
}
