//! Tree-walking interpreter.
//!
//! Evaluation never fails at the Rust level. Every anomaly is a
//! `Value::Error` returned up the call tree; `return` travels the same way
//! as `Value::ReturnValue`. Both are "signals": composite nodes stop
//! evaluating siblings as soon as a child produces one.
//!
//! # Module Structure
//!
//! - `mod.rs`: `Interpreter`, `Node` dispatch, call depth accounting
//! - `builder.rs`: `InterpreterBuilder` and defaults
//! - `statements.rs`: program, block, and statement evaluation
//! - `expressions.rs`: expression evaluation
//! - `function_call.rs`: call expressions and function application

/// Evaluate to a `Value`, returning early from the enclosing function if it
/// is an error or a pending `return`.
macro_rules! propagate {
    ($value:expr) => {
        match $value {
            signal @ (Value::Error(_) | Value::ReturnValue(_)) => return signal,
            value => value,
        }
    };
}

mod builder;
mod expressions;
mod function_call;
mod statements;

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

use monkey_ir::{BlockStatement, Expr, Program, Span, Stmt};
use tracing::debug;

use crate::environment::Environment;
use crate::errors::{call_depth_exceeded, EvalError};
use crate::value::Value;

/// Any syntax node the evaluator accepts.
#[derive(Clone, Copy, Debug)]
pub enum Node<'a> {
    Program(&'a Program),
    Block(&'a BlockStatement),
    Statement(&'a Stmt),
    Expression(&'a Expr),
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Node::Program(program)
    }
}

impl<'a> From<&'a BlockStatement> for Node<'a> {
    fn from(block: &'a BlockStatement) -> Self {
        Node::Block(block)
    }
}

impl<'a> From<&'a Stmt> for Node<'a> {
    fn from(stmt: &'a Stmt) -> Self {
        Node::Statement(stmt)
    }
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        Node::Expression(expr)
    }
}

/// Tree-walking interpreter.
///
/// Holds the global environment used by [`Interpreter::eval_program`] and the
/// call depth bookkeeping shared by every evaluation it performs.
pub struct Interpreter {
    env: Environment,
    max_call_depth: Option<usize>,
    call_depth: usize,
}

impl Interpreter {
    /// Interpreter with a fresh global scope and default limits.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Start configuring an interpreter: initial environment and call depth.
    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The global environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Most nested function applications allowed; `None` when unlimited.
    pub fn max_call_depth(&self) -> Option<usize> {
        self.max_call_depth
    }

    /// Evaluate a program in the global environment.
    ///
    /// Bindings persist across calls, which is what a REPL needs.
    pub fn eval_program(&mut self, program: &Program) -> Value {
        let env = self.env.clone();
        self.evaluate(Node::Program(program), &env)
    }

    /// Evaluate any node in `env`.
    pub fn evaluate(&mut self, node: Node<'_>, env: &Environment) -> Value {
        match node {
            Node::Program(program) => self.eval_program_in(program, env),
            Node::Block(block) => self.eval_block(block, env),
            Node::Statement(stmt) => self.eval_statement(stmt, env),
            Node::Expression(expr) => self.eval_expression(expr, env),
        }
    }

    /// Fail if one more call would exceed the configured depth.
    #[inline]
    fn check_call_depth(&self) -> Result<(), EvalError> {
        if let Some(limit) = self.max_call_depth {
            if self.call_depth >= limit {
                debug!(limit, "call depth limit reached");
                return Err(call_depth_exceeded(limit));
            }
        }
        Ok(())
    }

    /// Turn an error into a language value pointing at `span`.
    #[cold]
    fn fail(error: EvalError, span: Span) -> Value {
        let error = error.with_span(span);
        debug!(message = %error.message, ?span, "runtime error");
        Value::error(error)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate `node` in `env` with a default interpreter.
pub fn evaluate<'a>(node: impl Into<Node<'a>>, env: &Environment) -> Value {
    Interpreter::new().evaluate(node.into(), env)
}
