//! Property tests for re-lexing from snapshots.

use ejs_lexer::{LexMode, Lexer, Token, TokenKind};
use proptest::prelude::*;

fn drain(lexer: &mut Lexer) -> Result<Vec<Token>, String> {
    let mut out = Vec::new();
    loop {
        let token = lexer
            .next_token(LexMode::Statement)
            .map_err(|e| e.report())?;
        if token.is(TokenKind::Eof) {
            return Ok(out);
        }
        out.push(token);
    }
}

/// Source fragments that always lex cleanly.
fn fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "x", "i", "var ", "for ", "if ", "else ", " = ", " + ", "++", "<=", "<<", "(", ")", "{",
        "}", ";", ",", "\n", "12", "0", "'s'", "\"t\\n\"", "f(", "// c\n", "/* b\n */", " ",
    ])
}

proptest! {
    #[test]
    fn restore_replays_identically(parts in prop::collection::vec(fragment(), 0..40), skip in 0usize..20) {
        let src: String = parts.concat();
        let mut lexer = Lexer::open(&src);
        for _ in 0..skip {
            if lexer.next_token(LexMode::Statement).is_err() {
                break;
            }
        }
        let snap = lexer.snapshot();
        let first = drain(&mut lexer);
        lexer.restore(&snap);
        let second = drain(&mut lexer);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn offsets_never_decrease(parts in prop::collection::vec(fragment(), 0..40)) {
        let src: String = parts.concat();
        let mut lexer = Lexer::open(&src);
        let mut last = 0;
        while let Ok(token) = lexer.next_token(LexMode::Expression) {
            prop_assert!(lexer.offset() >= last);
            last = lexer.offset();
            if token.is(TokenKind::Eof) {
                break;
            }
        }
    }
}
