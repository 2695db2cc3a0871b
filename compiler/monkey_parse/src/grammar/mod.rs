//! Grammar rules.
//!
//! - `stmt.rs`: `let`, `return`, expression statements, blocks
//! - `expr.rs`: precedence climbing, prefix forms, `if`, `fn`, calls

mod expr;
mod stmt;
