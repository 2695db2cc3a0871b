//! Runtime error types.
//!
//! Runtime errors are language values (`Value::Error`), not Rust errors
//! threaded through `?` across the whole evaluator. `EvalError` is the
//! payload: a structured `EvalErrorKind` plus the rendered message and the
//! span of the node that failed.
//!
//! Factory functions are the public API for creating errors; they keep
//! `kind` and `message` in sync.

use monkey_ir::{InfixOp, PrefixOp, Span};

use crate::value::ValueType;

/// Typed error category.
///
/// The `Display` text is the user-visible message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Operators
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        left: ValueType,
        op: InfixOp,
        right: ValueType,
    },
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator { op: PrefixOp, operand: ValueType },
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        left: ValueType,
        op: InfixOp,
        right: ValueType,
    },

    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    // Bindings
    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },

    // Calls
    #[error("not a function: {type_name}")]
    NotAFunction { type_name: ValueType },
    #[error("wrong number of arguments: want={want}, got={got}")]
    WrongArgumentCount { want: usize, got: usize },
    #[error("maximum call depth of {limit} exceeded")]
    CallDepthExceeded { limit: usize },
}

/// Evaluation error.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message; always `kind.to_string()`.
    pub message: String,
    /// Source location of the node that produced the error.
    pub span: Option<Span>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span: None,
        }
    }

    /// Attach a source span, keeping one that is already set.
    ///
    /// Errors are created at the innermost failing node, so the first span
    /// attached is the most precise one.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }
}

/// Spans are location metadata; two errors are equal when they say the same thing.
impl PartialEq for EvalError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for EvalError {}

// Operator errors

/// Operands of an infix operator have different types.
#[cold]
pub fn type_mismatch(left: ValueType, op: InfixOp, right: ValueType) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch { left, op, right })
}

/// Prefix operator is not defined for the operand type.
#[cold]
pub fn unknown_prefix_operator(op: PrefixOp, operand: ValueType) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownPrefixOperator { op, operand })
}

/// Infix operator is not defined for two operands of this type.
#[cold]
pub fn unknown_infix_operator(left: ValueType, op: InfixOp, right: ValueType) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownInfixOperator { left, op, right })
}

// Arithmetic errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Checked arithmetic failed; `operation` names it ("addition", "negation").
#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

// Binding errors

#[cold]
pub fn identifier_not_found(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IdentifierNotFound {
        name: name.to_string(),
    })
}

// Call errors

#[cold]
pub fn not_a_function(type_name: ValueType) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction { type_name })
}

#[cold]
pub fn wrong_argument_count(want: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgumentCount { want, got })
}

#[cold]
pub fn call_depth_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CallDepthExceeded { limit })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn messages_follow_error_taxonomy() {
        let cases = [
            (
                type_mismatch(ValueType::Integer, InfixOp::Add, ValueType::Boolean),
                "type mismatch: INTEGER + BOOLEAN",
            ),
            (
                unknown_prefix_operator(PrefixOp::Neg, ValueType::Boolean),
                "unknown operator: -BOOLEAN",
            ),
            (
                unknown_infix_operator(ValueType::Boolean, InfixOp::Add, ValueType::Boolean),
                "unknown operator: BOOLEAN + BOOLEAN",
            ),
            (identifier_not_found("foobar"), "identifier not found: foobar"),
            (not_a_function(ValueType::Integer), "not a function: INTEGER"),
            (
                wrong_argument_count(2, 1),
                "wrong number of arguments: want=2, got=1",
            ),
            (division_by_zero(), "division by zero"),
            (integer_overflow("addition"), "integer overflow in addition"),
            (call_depth_exceeded(100), "maximum call depth of 100 exceeded"),
        ];
        for (error, expected) in cases {
            assert_eq!(error.message, expected);
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn first_span_wins() {
        let error = division_by_zero()
            .with_span(Span::new(4, 9))
            .with_span(Span::new(0, 20));
        assert_eq!(error.span, Some(Span::new(4, 9)));
    }

    #[test]
    fn equality_ignores_span() {
        assert_eq!(
            division_by_zero().with_span(Span::new(1, 2)),
            division_by_zero()
        );
    }
}
