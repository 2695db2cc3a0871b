//! Function call evaluation methods for the Interpreter.

use monkey_ir::{Expr, Span};

use super::Interpreter;
use crate::environment::Environment;
use crate::errors::{not_a_function, wrong_argument_count};
use crate::value::Value;

impl Interpreter {
    /// Evaluate `callee(arguments)`.
    ///
    /// The callee is evaluated first, then the arguments left to right in the
    /// caller's environment. The first signal among them wins; only after all
    /// of them succeed is the callee checked and applied.
    pub(super) fn eval_call(
        &mut self,
        callee: &Expr,
        arguments: &[Expr],
        span: Span,
        env: &Environment,
    ) -> Value {
        let function = propagate!(self.eval_expression(callee, env));

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(propagate!(self.eval_expression(argument, env)));
        }

        self.apply_function(&function, args, span)
    }

    /// Apply a function value to evaluated arguments.
    ///
    /// Parameters are bound in a fresh scope whose parent is the function's
    /// captured environment. A `return` from the body is unwrapped here.
    #[tracing::instrument(level = "debug", skip_all, fields(arity = args.len(), depth = self.call_depth))]
    pub fn apply_function(&mut self, function: &Value, args: Vec<Value>, span: Span) -> Value {
        let Value::Function(function) = function else {
            return Self::fail(not_a_function(function.type_of()), span);
        };

        let want = function.literal.arity();
        if want != args.len() {
            return Self::fail(wrong_argument_count(want, args.len()), span);
        }
        if let Err(error) = self.check_call_depth() {
            return Self::fail(error, span);
        }

        let call_env = function.env.enclosed();
        for (parameter, arg) in function.literal.parameters.iter().zip(args) {
            call_env.set(parameter.clone(), arg);
        }

        self.call_depth = self.call_depth.saturating_add(1);
        let result = self.eval_block(&function.literal.body, &call_env);
        self.call_depth = self.call_depth.saturating_sub(1);

        result.unwrap_return()
    }
}
