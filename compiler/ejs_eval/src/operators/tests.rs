use super::*;
use ejs_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn eval(l: &str, op: BinaryOp, r: &str) -> String {
    match evaluate_binary(l, op, r) {
        Ok(v) => v,
        Err(e) => panic!("{l} {} {r} failed: {e}", op.as_str()),
    }
}

#[test]
fn numeric_detection() {
    assert!(is_numeric("0"));
    assert!(is_numeric("0042"));
    assert!(!is_numeric(""));
    assert!(!is_numeric("-3"));
    assert!(!is_numeric("1a"));
    assert!(!is_numeric(" 1"));
}

#[test]
fn truthiness_is_first_character() {
    assert!(is_truthy("1"));
    assert!(is_truthy("10"));
    assert!(!is_truthy("2"));
    assert!(!is_truthy("0"));
    assert!(!is_truthy(""));
}

#[test]
fn int_arithmetic() {
    assert_eq!(eval("2", BinaryOp::Add, "3"), "5");
    assert_eq!(eval("2", BinaryOp::Sub, "3"), "-1");
    assert_eq!(eval("6", BinaryOp::Mul, "7"), "42");
    assert_eq!(eval("7", BinaryOp::Div, "2"), "3");
    assert_eq!(eval("7", BinaryOp::Mod, "2"), "1");
    assert_eq!(eval("1", BinaryOp::Shl, "4"), "16");
    assert_eq!(eval("256", BinaryOp::Shr, "4"), "16");
}

#[test]
fn zero_divisor_yields_zero() {
    assert_eq!(eval("7", BinaryOp::Mod, "0"), "0");
    assert_eq!(eval("7", BinaryOp::Div, "0"), "0");
}

#[test]
fn shift_uses_low_six_bits() {
    assert_eq!(eval("1", BinaryOp::Shl, "65"), "2");
}

#[test]
fn arithmetic_wraps() {
    assert_eq!(
        eval("9223372036854775807", BinaryOp::Add, "1"),
        i64::MIN.to_string()
    );
}

#[test]
fn comparisons() {
    assert_eq!(eval("2", BinaryOp::Lt, "10"), "1");
    assert_eq!(eval("2", BinaryOp::Eq, "02"), "1");
    assert_eq!(eval("2", BinaryOp::Ge, "3"), "0");
    // Lexicographic once either side is not numeric.
    assert_eq!(eval("b", BinaryOp::Gt, "a"), "1");
    assert_eq!(eval("10", BinaryOp::Lt, "9x"), "1");
    assert_eq!(eval("", BinaryOp::Eq, ""), "1");
}

#[test]
fn not_operator() {
    assert_eq!(eval("0", BinaryOp::Not, "0"), "1");
    assert_eq!(eval("0", BinaryOp::Not, "5"), "0");
}

#[test]
fn string_concatenation() {
    assert_eq!(eval("foo", BinaryOp::Add, "bar"), "foobar");
    assert_eq!(eval("", BinaryOp::Add, "1"), "1");
    assert_eq!(eval("x", BinaryOp::Add, "0"), "x0");
}

#[test]
fn bad_string_operators() {
    for op in [BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div, BinaryOp::Shl, BinaryOp::Not] {
        let Err(err) = evaluate_binary("a", op, "b") else {
            panic!("{} should fail on strings", op.as_str());
        };
        assert_eq!(err.code, ErrorCode::E6005);
    }
}

#[test]
fn conditions() {
    assert_eq!(evaluate_condition("1", LogicalOp::And, "0"), Ok("0".to_string()));
    assert_eq!(evaluate_condition("1", LogicalOp::Or, "0"), Ok("1".to_string()));
    assert_eq!(evaluate_condition("2", LogicalOp::And, "3"), Ok("1".to_string()));
    let Err(err) = evaluate_condition("a", LogicalOp::And, "1") else {
        panic!("non-numeric condition accepted");
    };
    assert_eq!(err.code, ErrorCode::E6004);
}

proptest! {
    #[test]
    fn numeric_ops_match_i64(a in 0i64..1_000_000_000, b in 0i64..1_000_000_000) {
        let (sa, sb) = (a.to_string(), b.to_string());
        prop_assert_eq!(eval(&sa, BinaryOp::Add, &sb), (a + b).to_string());
        prop_assert_eq!(eval(&sa, BinaryOp::Sub, &sb), (a - b).to_string());
        prop_assert_eq!(eval(&sa, BinaryOp::Mul, &sb), a.wrapping_mul(b).to_string());
        let div = if b == 0 { 0 } else { a / b };
        prop_assert_eq!(eval(&sa, BinaryOp::Div, &sb), div.to_string());
        let rem = if b == 0 { 0 } else { a % b };
        prop_assert_eq!(eval(&sa, BinaryOp::Mod, &sb), rem.to_string());
        prop_assert_eq!(eval(&sa, BinaryOp::Lt, &sb), u8::from(a < b).to_string());
        prop_assert_eq!(eval(&sa, BinaryOp::Ne, &sb), u8::from(a != b).to_string());
    }
}
