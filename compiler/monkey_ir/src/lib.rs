//! Monkey IR - syntax tree types shared by the front end and the evaluator.
//!
//! This crate contains:
//! - Spans for source locations
//! - Names for identifiers
//! - AST nodes (`Program`, `Stmt`, `Expr`, `BlockStatement`, `FunctionLiteral`)
//! - Prefix/infix operators and their binding powers
//!
//! Every node implements `Display`, producing the canonical fully
//! parenthesised rendering used when inspecting function values.

pub mod ast;
mod name;
mod span;

pub use ast::{
    BlockStatement, Expr, ExprKind, FunctionLiteral, InfixOp, ParamList, Precedence, PrefixOp,
    Program, Stmt, StmtKind,
};
pub use name::Name;
pub use span::{Span, SpanError, Spanned};
