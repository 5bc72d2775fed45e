//! Operator semantics.
//!
//! Every value is a string. An operation is numeric when both operands are
//! non-empty runs of ASCII digits; otherwise it falls back to string
//! semantics, where only `+` and the comparisons are meaningful.

use ejs_diagnostic::EjsError;
use ejs_lexer::{BinaryOp, LogicalOp};

use crate::errors::{bad_operator, conditional_not_numeric};

/// Non-empty and made only of ASCII digits.
#[inline]
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// A result counts as true when its first character is `1`.
#[inline]
pub fn is_truthy(s: &str) -> bool {
    s.as_bytes().first() == Some(&b'1')
}

/// Parse a digit run. Values beyond `i64` wrap.
fn parse_number(s: &str) -> i64 {
    s.bytes().fold(0i64, |acc, b| {
        acc.wrapping_mul(10).wrapping_add(i64::from(b - b'0'))
    })
}

#[inline]
fn flag(b: bool) -> String {
    String::from(if b { "1" } else { "0" })
}

/// Evaluate `lhs op rhs`.
pub fn evaluate_binary(lhs: &str, op: BinaryOp, rhs: &str) -> Result<String, EjsError> {
    if is_numeric(lhs) && is_numeric(rhs) {
        Ok(evaluate_numeric(parse_number(lhs), op, parse_number(rhs)))
    } else {
        evaluate_string(lhs, op, rhs)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "shift amounts are masked to the low six bits"
)]
fn evaluate_numeric(l: i64, op: BinaryOp, r: i64) -> String {
    let value = match op {
        BinaryOp::Add => l.wrapping_add(r),
        BinaryOp::Sub => l.wrapping_sub(r),
        BinaryOp::Mul => l.wrapping_mul(r),
        BinaryOp::Div => {
            if r == 0 {
                0
            } else {
                l.wrapping_div(r)
            }
        }
        BinaryOp::Mod => {
            if r == 0 {
                0
            } else {
                l.wrapping_rem(r)
            }
        }
        BinaryOp::Shl => l.wrapping_shl((r & 63) as u32),
        BinaryOp::Shr => l.wrapping_shr((r & 63) as u32),
        BinaryOp::Eq => return flag(l == r),
        BinaryOp::Ne => return flag(l != r),
        BinaryOp::Lt => return flag(l < r),
        BinaryOp::Le => return flag(l <= r),
        BinaryOp::Gt => return flag(l > r),
        BinaryOp::Ge => return flag(l >= r),
        BinaryOp::Not => return flag(r == 0),
    };
    value.to_string()
}

fn evaluate_string(lhs: &str, op: BinaryOp, rhs: &str) -> Result<String, EjsError> {
    let result = match op {
        BinaryOp::Add => {
            let mut out = String::with_capacity(lhs.len() + rhs.len());
            out.push_str(lhs);
            out.push_str(rhs);
            return Ok(out);
        }
        BinaryOp::Eq => lhs == rhs,
        BinaryOp::Ne => lhs != rhs,
        BinaryOp::Lt => lhs < rhs,
        BinaryOp::Le => lhs <= rhs,
        BinaryOp::Gt => lhs > rhs,
        BinaryOp::Ge => lhs >= rhs,
        BinaryOp::Sub
        | BinaryOp::Mul
        | BinaryOp::Div
        | BinaryOp::Mod
        | BinaryOp::Shl
        | BinaryOp::Shr
        | BinaryOp::Not => return Err(bad_operator(op)),
    };
    Ok(flag(result))
}

/// Evaluate `lhs && rhs` or `lhs || rhs`. Both operands must be numeric.
pub fn evaluate_condition(lhs: &str, op: LogicalOp, rhs: &str) -> Result<String, EjsError> {
    if !is_numeric(lhs) || !is_numeric(rhs) {
        return Err(conditional_not_numeric());
    }
    let l = parse_number(lhs) != 0;
    let r = parse_number(rhs) != 0;
    Ok(flag(match op {
        LogicalOp::And => l && r,
        LogicalOp::Or => l || r,
    }))
}

#[cfg(test)]
mod tests;
