//! Runtime values.
//!
//! `Value` is a closed sum type. `Boolean` and `Null` carry no heap data, so
//! every `true`, `false` and `null` is the same value as [`TRUE`], [`FALSE`]
//! and [`NULL`]: identity of these singletons is just variant (and flag)
//! equality, and no operation ever allocates a fresh one.
//!
//! Values are immutable. Heap payloads are reference counted and cloning a
//! `Value` only bumps a count.

use std::fmt;
use std::rc::Rc;

use monkey_ir::{FunctionLiteral, ParamList};

use crate::environment::Environment;
use crate::errors::EvalError;

/// The shared `true`.
pub const TRUE: Value = Value::Boolean(true);
/// The shared `false`.
pub const FALSE: Value = Value::Boolean(false);
/// The shared `null`.
pub const NULL: Value = Value::Null;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Null,
    /// A `return` in flight. Unwrapped at function and program boundaries.
    ReturnValue(Rc<Value>),
    /// A runtime error in flight. Never caught; it becomes the program result.
    Error(Rc<EvalError>),
    Function(Rc<FunctionValue>),
}

/// A closure: a function literal plus the environment it was evaluated in.
///
/// The environment is shared, not copied. A function bound in the scope it
/// captures forms a reference cycle with that scope; such pairs live until
/// the process ends.
pub struct FunctionValue {
    pub literal: Rc<FunctionLiteral>,
    pub env: Environment,
}

impl FunctionValue {
    pub fn new(literal: Rc<FunctionLiteral>, env: Environment) -> Self {
        FunctionValue { literal, env }
    }
}

impl fmt::Debug for FunctionValue {
    // The captured environment can contain this function; don't walk it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("parameters", &self.literal.parameters)
            .finish_non_exhaustive()
    }
}

/// Type tag of a value, as shown in error messages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Integer,
    Boolean,
    Null,
    ReturnValue,
    Error,
    Function,
}

impl ValueType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueType::Integer => "INTEGER",
            ValueType::Boolean => "BOOLEAN",
            ValueType::Null => "NULL",
            ValueType::ReturnValue => "RETURN_VALUE",
            ValueType::Error => "ERROR",
            ValueType::Function => "FUNCTION",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// The shared boolean singleton for `b`.
    #[inline]
    pub const fn from_bool(b: bool) -> Value {
        if b {
            TRUE
        } else {
            FALSE
        }
    }

    pub fn return_value(value: Value) -> Value {
        Value::ReturnValue(Rc::new(value))
    }

    pub fn error(error: EvalError) -> Value {
        Value::Error(Rc::new(error))
    }

    pub fn function(function: FunctionValue) -> Value {
        Value::Function(Rc::new(function))
    }

    pub fn type_of(&self) -> ValueType {
        match self {
            Value::Integer(_) => ValueType::Integer,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Null => ValueType::Null,
            Value::ReturnValue(_) => ValueType::ReturnValue,
            Value::Error(_) => ValueType::Error,
            Value::Function(_) => ValueType::Function,
        }
    }

    /// Type tag string, e.g. `"INTEGER"`.
    pub fn type_name(&self) -> &'static str {
        self.type_of().as_str()
    }

    /// Only `null` and `false` are falsy. `0` is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Boolean(false))
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Whether this value stops sibling evaluation: an error or a pending return.
    #[inline]
    pub fn is_signal(&self) -> bool {
        matches!(self, Value::Error(_) | Value::ReturnValue(_))
    }

    /// Strip one `ReturnValue` wrapper, if any.
    pub fn unwrap_return(self) -> Value {
        match self {
            Value::ReturnValue(inner) => Rc::unwrap_or_clone(inner),
            other => other,
        }
    }

    /// Identity comparison used by `==` on non-integer operands.
    ///
    /// Booleans and null are singletons, so tag equality is identity.
    /// Heap values are identical only if they are the same allocation.
    pub fn is_identical(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::ReturnValue(a), Value::ReturnValue(b)) => Rc::ptr_eq(a, b),
            (Value::Error(a), Value::Error(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Human-readable rendering.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl From<EvalError> for Value {
    fn from(error: EvalError) -> Self {
        Value::error(error)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::from_bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
            Value::ReturnValue(inner) => write!(f, "{inner}"),
            Value::Error(error) => write!(f, "ERROR: {}", error.message),
            Value::Function(function) => write!(
                f,
                "fn({}) {{\n{}\n}}",
                ParamList(&function.literal.parameters),
                function.literal.body
            ),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "Integer({n})"),
            Value::Boolean(b) => write!(f, "Boolean({b})"),
            Value::Null => f.write_str("Null"),
            Value::ReturnValue(inner) => write!(f, "ReturnValue({inner:?})"),
            Value::Error(error) => write!(f, "Error({:?})", error.message),
            Value::Function(function) => write!(f, "Function({function:?})"),
        }
    }
}

/// Structural equality for inspecting results.
///
/// Errors compare by kind and functions by identity. The language's own
/// `==` uses [`Value::is_identical`] instead.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::ReturnValue(a), Value::ReturnValue(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            _ => self.is_identical(other),
        }
    }
}

#[cfg(test)]
mod tests;
