//! Statement Types
//!
//! Statement node and variants, blocks, and the program root.

use std::fmt;

use super::expr::Expr;
use crate::{Name, Span, Spanned};

/// Statement node.
#[derive(Clone, PartialEq, Eq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        self.span
    }
}

/// Statement kinds.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum StmtKind {
    /// `let name = value;`
    Let { name: Name, value: Expr },

    /// `return value;` or a bare `return;`
    Return(Option<Expr>),

    /// An expression evaluated for its value.
    Expression(Expr),
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Let { name, value } => write!(f, "let {name} = {value};"),
            StmtKind::Return(Some(value)) => write!(f, "return {value};"),
            StmtKind::Return(None) => f.write_str("return;"),
            StmtKind::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

/// A braced sequence of statements: the body of an `if` branch or a function.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BlockStatement {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

impl Spanned for BlockStatement {
    fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.statements)
    }
}

/// The root of a parsed source file.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.statements)
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, statements: &[Stmt]) -> fmt::Result {
    for (i, stmt) in statements.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{stmt}")?;
    }
    Ok(())
}
