//! The `lex` command: dump a script's token stream.

use std::fmt::Write;

use ejs_lexer::{tokenize, LexMode, Token};

use super::{read_file, report_error};

/// One line per token: kind, source text and byte span.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for tok in tokens {
        let _ = writeln!(
            out,
            "  {:?} {} @ {}..{}",
            tok.kind, tok, tok.span.start, tok.span.end
        );
    }
    out
}

/// Print the tokens of a script file, as read in statement mode.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    match tokenize(&content, LexMode::Statement) {
        Ok(tokens) => {
            println!("Tokens for '{}' ({} tokens):", path, tokens.len());
            print!("{}", format_tokens(&tokens));
        }
        Err(err) => {
            report_error(path, &content, &err);
            std::process::exit(1);
        }
    }
}
