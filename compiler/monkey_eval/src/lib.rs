#![deny(clippy::arithmetic_side_effects)]
//! Monkey Eval - tree-walking evaluator for Monkey programs.
//!
//! # Architecture
//!
//! - `Value`: closed sum of runtime values, with `true`/`false`/`null`
//!   singletons and in-band `ReturnValue`/`Error` signals
//! - `Environment`: shared, parent-linked scopes for closures
//! - `Interpreter`: recursive evaluation of `monkey_ir` syntax trees
//! - `evaluate_infix` / `evaluate_prefix`: direct enum-based operator dispatch
//! - `errors`: runtime error taxonomy and factory functions
//!
//! Evaluation returns a `Value`, never a Rust `Result`: callers tell success
//! from failure by checking [`Value::is_error`].

mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod unary_operators;
mod value;

pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind};
pub use interpreter::{evaluate, Interpreter, InterpreterBuilder, Node, DEFAULT_MAX_CALL_DEPTH};
pub use operators::evaluate_infix;
pub use unary_operators::evaluate_prefix;
pub use value::{FunctionValue, Value, ValueType, FALSE, NULL, TRUE};

/// Result of applying an operator.
pub type EvalResult = Result<Value, EvalError>;

#[cfg(test)]
mod tests;
