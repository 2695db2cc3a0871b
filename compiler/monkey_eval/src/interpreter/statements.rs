//! Program, block, and statement evaluation.

use monkey_ir::{BlockStatement, Program, Stmt, StmtKind};
use tracing::trace;

use super::Interpreter;
use crate::environment::Environment;
use crate::value::{Value, NULL};

impl Interpreter {
    /// Evaluate statements in order; the last result wins.
    ///
    /// A `return` ends the program with its unwrapped value and an error ends
    /// it unchanged. An empty program evaluates to `null`.
    pub(super) fn eval_program_in(&mut self, program: &Program, env: &Environment) -> Value {
        let mut result = NULL;
        for stmt in &program.statements {
            result = self.eval_statement(stmt, env);
            match result {
                Value::ReturnValue(_) => return result.unwrap_return(),
                Value::Error(_) => return result,
                _ => {}
            }
        }
        result
    }

    /// Like a program, but `return` stays wrapped so it can unwind through
    /// nested blocks up to the function or program boundary.
    pub(super) fn eval_block(&mut self, block: &BlockStatement, env: &Environment) -> Value {
        let mut result = NULL;
        for stmt in &block.statements {
            result = self.eval_statement(stmt, env);
            if result.is_signal() {
                return result;
            }
        }
        result
    }

    pub(super) fn eval_statement(&mut self, stmt: &Stmt, env: &Environment) -> Value {
        match &stmt.kind {
            StmtKind::Expression(expr) => self.eval_expression(expr, env),
            StmtKind::Let { name, value } => {
                let value = propagate!(self.eval_expression(value, env));
                env.set(name.clone(), value);
                NULL
            }
            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => propagate!(self.eval_expression(expr, env)),
                    None => NULL,
                };
                trace!(value = %value, "return");
                Value::return_value(value)
            }
        }
    }
}
