//! Expression evaluation.

use std::rc::Rc;

use monkey_ir::{Expr, ExprKind};
use monkey_stack::ensure_sufficient_stack;
use tracing::trace;

use super::Interpreter;
use crate::environment::Environment;
use crate::errors::identifier_not_found;
use crate::operators::evaluate_infix;
use crate::unary_operators::evaluate_prefix;
use crate::value::{FunctionValue, Value, NULL};

impl Interpreter {
    /// Evaluate an expression.
    ///
    /// Wrapped in `ensure_sufficient_stack` so deeply nested expressions and
    /// deep recursion grow the native stack instead of overflowing it.
    pub(super) fn eval_expression(&mut self, expr: &Expr, env: &Environment) -> Value {
        ensure_sufficient_stack(|| self.eval_expression_inner(expr, env))
    }

    fn eval_expression_inner(&mut self, expr: &Expr, env: &Environment) -> Value {
        trace!(span = ?expr.span, "eval_expression");
        match &expr.kind {
            ExprKind::IntegerLiteral(n) => Value::Integer(*n),
            ExprKind::BooleanLiteral(b) => Value::from_bool(*b),

            ExprKind::Identifier(name) => match env.get(name.as_str()) {
                Some(value) => value,
                None => Self::fail(identifier_not_found(name.as_str()), expr.span),
            },

            ExprKind::Prefix { op, operand } => {
                let operand = propagate!(self.eval_expression(operand, env));
                evaluate_prefix(*op, &operand).unwrap_or_else(|e| Self::fail(e, expr.span))
            }

            // Left before right; a signal on the left skips the right entirely.
            ExprKind::Infix { op, left, right } => {
                let left = propagate!(self.eval_expression(left, env));
                let right = propagate!(self.eval_expression(right, env));
                evaluate_infix(*op, &left, &right).unwrap_or_else(|e| Self::fail(e, expr.span))
            }

            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                let condition = propagate!(self.eval_expression(condition, env));
                if condition.is_truthy() {
                    self.eval_block(consequence, env)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative, env)
                } else {
                    NULL
                }
            }

            // Captures the current scope by reference, not by copy.
            ExprKind::Function(literal) => {
                Value::function(FunctionValue::new(Rc::clone(literal), env.clone()))
            }

            ExprKind::Call {
                function,
                arguments,
            } => self.eval_call(function, arguments, expr.span, env),
        }
    }
}
