//! Property-based tests over generated source.

#![allow(
    clippy::arithmetic_side_effects,
    reason = "proptest macros expand to unchecked arithmetic"
)]

use monkey_ir::InfixOp;
use proptest::prelude::*;

use super::eval;
use crate::errors::{division_by_zero, integer_overflow};
use crate::Value;

/// Source text for an integer, written as a prefix negation when negative.
///
/// `i64::MIN` has no literal form and is left out of the strategies.
fn literal(n: i64) -> String {
    if n < 0 {
        format!("-{}", n.unsigned_abs())
    } else {
        n.to_string()
    }
}

fn any_int() -> impl Strategy<Value = i64> {
    (i64::MIN + 1)..=i64::MAX
}

fn arithmetic_op() -> impl Strategy<Value = InfixOp> {
    prop_oneof![
        Just(InfixOp::Add),
        Just(InfixOp::Sub),
        Just(InfixOp::Mul),
        Just(InfixOp::Div),
    ]
}

/// A small source expression paired with whether its value is truthy.
fn truthy_source() -> impl Strategy<Value = (String, bool)> {
    prop_oneof![
        any_int().prop_map(|n| (literal(n), true)),
        any::<bool>().prop_map(|b| (b.to_string(), b)),
        Just(("if (false) { 1 }".to_string(), false)),
        Just(("fn(x) { x }".to_string(), true)),
    ]
}

proptest! {
    #[test]
    fn integer_literal_round_trip(n in 0..=i64::MAX) {
        prop_assert_eq!(eval(&n.to_string()), Value::Integer(n));
    }

    #[test]
    fn negation_of_literal(n in 0..=i64::MAX) {
        prop_assert_eq!(eval(&format!("-{n}")), Value::Integer(-n));
    }

    #[test]
    fn double_negation_is_identity(n in any_int()) {
        prop_assert_eq!(eval(&format!("-(-({}))", literal(n))), Value::Integer(n));
    }

    #[test]
    fn double_bang_is_truthiness((source, truthy) in truthy_source()) {
        prop_assert_eq!(eval(&format!("!!({source})")), Value::from_bool(truthy));
        prop_assert_eq!(eval(&format!("!({source})")), Value::from_bool(!truthy));
    }

    #[test]
    fn arithmetic_matches_checked_i64(a in any_int(), b in any_int(), op in arithmetic_op()) {
        let source = format!("({}) {} ({})", literal(a), op, literal(b));
        let expected = match op {
            InfixOp::Add => a.checked_add(b).map_or_else(|| Value::error(integer_overflow("addition")), Value::Integer),
            InfixOp::Sub => a.checked_sub(b).map_or_else(|| Value::error(integer_overflow("subtraction")), Value::Integer),
            InfixOp::Mul => a.checked_mul(b).map_or_else(|| Value::error(integer_overflow("multiplication")), Value::Integer),
            _ if b == 0 => Value::error(division_by_zero()),
            _ => a.checked_div(b).map_or_else(|| Value::error(integer_overflow("division")), Value::Integer),
        };
        prop_assert_eq!(eval(&source), expected);
    }

    #[test]
    fn comparisons_match_i64(a in any_int(), b in any_int()) {
        let (a_src, b_src) = (literal(a), literal(b));
        prop_assert_eq!(eval(&format!("({a_src}) < ({b_src})")), Value::from_bool(a < b));
        prop_assert_eq!(eval(&format!("({a_src}) > ({b_src})")), Value::from_bool(a > b));
        prop_assert_eq!(eval(&format!("({a_src}) == ({b_src})")), Value::from_bool(a == b));
        prop_assert_eq!(eval(&format!("({a_src}) != ({b_src})")), Value::from_bool(a != b));
    }

    #[test]
    fn let_binding_round_trip(n in any_int()) {
        prop_assert_eq!(eval(&format!("let x = {}; let y = x; y", literal(n))), Value::Integer(n));
    }
}
