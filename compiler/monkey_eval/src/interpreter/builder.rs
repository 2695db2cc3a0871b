//! `InterpreterBuilder` for creating `Interpreter` instances.

use super::Interpreter;
use crate::environment::Environment;

/// Call depth allowed when none is configured.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Builder for `Interpreter`.
#[derive(Debug)]
pub struct InterpreterBuilder {
    env: Option<Environment>,
    max_call_depth: Option<usize>,
}

impl InterpreterBuilder {
    /// Defaults: a fresh global scope and `DEFAULT_MAX_CALL_DEPTH`.
    pub fn new() -> Self {
        InterpreterBuilder {
            env: None,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    /// Set the global environment. Defaults to a fresh, empty one.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Limit nested function applications; `None` removes the limit and
    /// leaves only stack growth between deep recursion and the allocator.
    #[must_use]
    pub fn max_call_depth(mut self, limit: Option<usize>) -> Self {
        self.max_call_depth = limit;
        self
    }

    /// Create the interpreter with its call depth counter at zero.
    pub fn build(self) -> Interpreter {
        Interpreter {
            env: self.env.unwrap_or_default(),
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
