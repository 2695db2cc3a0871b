//! Infix operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the value set is closed, so pattern matching
//! gives exhaustiveness checking for free. Operands arrive already evaluated
//! and free of error and return signals.

use monkey_ir::InfixOp;

use crate::errors::{
    division_by_zero, integer_overflow, type_mismatch, unknown_infix_operator,
};
use crate::value::Value;
use crate::EvalResult;

/// Checked arithmetic where the only failure is overflow.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Integer).ok_or_else(|| integer_overflow(op_name))
}

/// Apply `op` to two evaluated operands.
///
/// Dispatch order:
/// 1. two integers: arithmetic and comparison
/// 2. `==` / `!=` on anything else: identity
/// 3. differing types: type mismatch
/// 4. otherwise: unknown operator
pub fn evaluate_infix(op: InfixOp, left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => eval_integer_infix(op, *a, *b),
        _ => match op {
            InfixOp::Eq => Ok(Value::from_bool(left.is_identical(right))),
            InfixOp::NotEq => Ok(Value::from_bool(!left.is_identical(right))),
            _ if left.type_of() != right.type_of() => {
                Err(type_mismatch(left.type_of(), op, right.type_of()))
            }
            _ => Err(unknown_infix_operator(left.type_of(), op, right.type_of())),
        },
    }
}

/// Integer operators. Division truncates toward zero.
fn eval_integer_infix(op: InfixOp, a: i64, b: i64) -> EvalResult {
    match op {
        InfixOp::Add => checked_arith(a.checked_add(b), "addition"),
        InfixOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        InfixOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        InfixOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked_arith(a.checked_div(b), "division")
            }
        }
        InfixOp::Lt => Ok(Value::from_bool(a < b)),
        InfixOp::Gt => Ok(Value::from_bool(a > b)),
        InfixOp::Eq => Ok(Value::from_bool(a == b)),
        InfixOp::NotEq => Ok(Value::from_bool(a != b)),
    }
}
