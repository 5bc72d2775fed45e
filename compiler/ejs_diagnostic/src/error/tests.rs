use super::*;
use pretty_assertions::assert_eq;

fn location(line: u32, text: &str) -> SourceLocation {
    SourceLocation {
        line,
        column: 1,
        span: Span::new(0, 1),
        line_text: text.to_string(),
    }
}

#[test]
fn display_is_bare_message() {
    let err = EjsError::new(ErrorCode::E6001, "Undefined variable")
        .with_location(location(2, "y = x;"));
    assert_eq!(err.to_string(), "Undefined variable");
}

#[test]
fn report_includes_line_text() {
    let err = EjsError::new(ErrorCode::E6001, "Undefined variable")
        .with_location(location(3, "y = x + 1;"));
    assert_eq!(
        err.report(),
        "Undefined variable\n At line 3, line => \n\ny = x + 1;\n"
    );
}

#[test]
fn report_without_location() {
    let err = EjsError::new(ErrorCode::E7002, "Too many interpreters");
    assert_eq!(err.report(), "Too many interpreters");
    assert_eq!(err.line(), 0);
    assert_eq!(err.span(), None);
}

#[test]
fn innermost_location_wins() {
    let err = EjsError::new(ErrorCode::E1001, "Syntax error")
        .with_location(location(1, "inner"))
        .with_location(location(9, "outer"));
    assert_eq!(err.line(), 1);
    assert_eq!(err.location.map(|l| l.line_text), Some("inner".to_string()));
}

#[test]
fn category_follows_code() {
    let err = EjsError::new(ErrorCode::E6004, "Conditional must be numeric");
    assert_eq!(err.category(), ErrorCategory::Runtime);
}

#[test]
fn span_helpers() {
    let span = Span::from_range(4..9);
    assert_eq!(span, Span::new(4, 9));
    assert_eq!(span.len(), 5);
    assert!(!span.is_empty());
    assert!(Span::DUMMY.is_empty());
    assert_eq!(span.to_range(), 4..9);
}
