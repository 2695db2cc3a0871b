//! Syntax tree consumed by the evaluator.
//!
//! The tree is produced by `monkey_parse` and treated as immutable afterwards.
//! Function literals are held behind `Rc` so runtime function values can
//! share them with the tree.

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind, FunctionLiteral, ParamList};
pub use operators::{InfixOp, Precedence, PrefixOp};
pub use stmt::{BlockStatement, Program, Stmt, StmtKind};

#[cfg(test)]
mod tests;
