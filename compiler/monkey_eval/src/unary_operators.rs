//! Prefix operator implementations for the evaluator.

use monkey_ir::PrefixOp;

use crate::errors::{integer_overflow, unknown_prefix_operator};
use crate::value::Value;
use crate::EvalResult;

/// Apply a prefix operator to an evaluated operand.
///
/// `!` negates truthiness and accepts any value; `-` needs an integer.
pub fn evaluate_prefix(op: PrefixOp, operand: &Value) -> EvalResult {
    match (op, operand) {
        (PrefixOp::Not, _) => Ok(Value::from_bool(!operand.is_truthy())),
        (PrefixOp::Neg, Value::Integer(n)) => n
            .checked_neg()
            .map(Value::Integer)
            .ok_or_else(|| integer_overflow("negation")),
        (PrefixOp::Neg, _) => Err(unknown_prefix_operator(op, operand.type_of())),
    }
}
