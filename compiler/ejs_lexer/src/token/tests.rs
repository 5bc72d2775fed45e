use super::*;
use pretty_assertions::assert_eq;

#[test]
fn keywords() {
    assert_eq!(TokenKind::keyword("if"), Some(TokenKind::If));
    assert_eq!(TokenKind::keyword("return"), Some(TokenKind::Return));
    assert_eq!(TokenKind::keyword("function"), None);
    assert_eq!(TokenKind::keyword("If"), None);
}

#[test]
fn comparison_classification() {
    assert!(BinaryOp::Le.is_comparison());
    assert!(!BinaryOp::Shl.is_comparison());
    assert!(!BinaryOp::Not.is_comparison());
}

#[test]
fn inc_dec_delta() {
    assert_eq!(IncDecOp::Inc.delta(), 1);
    assert_eq!(IncDecOp::Dec.delta(), -1);
}

#[test]
fn display() {
    let lit = Token::new(TokenKind::Literal, "a\tb", Span::DUMMY);
    assert_eq!(lit.to_string(), "\"a\\tb\"");
    let op = Token::new(TokenKind::Operator(BinaryOp::Shr), ">>", Span::DUMMY);
    assert_eq!(op.to_string(), ">>");
    assert_eq!(Token::new(TokenKind::Eof, "", Span::DUMMY).to_string(), "<eof>");
}
