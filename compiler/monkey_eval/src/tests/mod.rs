//! Evaluator tests.
//!
//! - `eval_tests`: end-to-end evaluation of parsed source
//! - `operators_tests`: operator dispatch on values
//! - `property_tests`: proptest properties over generated programs

mod property_tests;

use monkey_parse::parse;

use crate::{Environment, Interpreter, Value};

/// Parse and evaluate `source` in a fresh global environment.
pub(crate) fn eval(source: &str) -> Value {
    eval_with(&mut Interpreter::new(), source)
}

pub(crate) fn eval_with(interpreter: &mut Interpreter, source: &str) -> Value {
    match parse(source) {
        Ok(program) => interpreter.eval_program(&program),
        Err(errors) => panic!("parse errors for {source:?}: {errors:?}"),
    }
}

/// Evaluate `source` and return its error message, failing if it succeeded.
pub(crate) fn eval_error(source: &str) -> String {
    match eval(source) {
        Value::Error(error) => error.message.clone(),
        other => panic!("expected an error for {source:?}, got {other:?}"),
    }
}

pub(crate) fn fresh_env() -> Environment {
    Environment::new(None)
}
