//! Expression Types
//!
//! Expression node and its variants.

use std::fmt;
use std::rc::Rc;

use super::operators::{InfixOp, PrefixOp};
use super::stmt::{BlockStatement, StmtKind};
use crate::{Name, Span, Spanned};

/// Expression node.
#[derive(Clone, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Children are freed from a worklist, so dropping a deeply nested tree
/// never recurses through the destructors.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.kind.take_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.kind.take_children(&mut pending);
        }
    }
}

impl ExprKind {
    /// Leaf placeholder left behind when children are taken.
    const EMPTY: ExprKind = ExprKind::BooleanLiteral(false);

    /// Move every directly owned child expression into `out`, leaving a leaf.
    fn take_children(&mut self, out: &mut Vec<Expr>) {
        match std::mem::replace(self, Self::EMPTY) {
            ExprKind::Identifier(_) | ExprKind::IntegerLiteral(_) | ExprKind::BooleanLiteral(_) => {}
            ExprKind::Prefix { operand, .. } => out.push(*operand),
            ExprKind::Infix { left, right, .. } => {
                out.push(*left);
                out.push(*right);
            }
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                out.push(*condition);
                take_block(consequence, out);
                if let Some(alternative) = alternative {
                    take_block(alternative, out);
                }
            }
            // Function values may still share the literal.
            ExprKind::Function(literal) => {
                if let Ok(literal) = Rc::try_unwrap(literal) {
                    take_block(literal.body, out);
                }
            }
            ExprKind::Call {
                function,
                arguments,
            } => {
                out.push(*function);
                out.extend(arguments);
            }
        }
    }
}

fn take_block(block: BlockStatement, out: &mut Vec<Expr>) {
    for stmt in block.statements {
        match stmt.kind {
            StmtKind::Let { value, .. } | StmtKind::Return(Some(value)) => out.push(value),
            StmtKind::Expression(expr) => out.push(expr),
            StmtKind::Return(None) => {}
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

/// Expression kinds.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ExprKind {
    /// Variable reference: `x`
    Identifier(Name),

    /// Integer literal: `42`
    IntegerLiteral(i64),

    /// Boolean literal: `true`, `false`
    BooleanLiteral(bool),

    /// Prefix operation: `!x`, `-x`
    Prefix { op: PrefixOp, operand: Box<Expr> },

    /// Infix operation: `left op right`
    Infix {
        op: InfixOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Conditional: `if (condition) { ... } else { ... }`
    If {
        condition: Box<Expr>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },

    /// Function literal: `fn(x, y) { ... }`
    ///
    /// Reference counted so that function values share the literal
    /// instead of copying its body.
    Function(Rc<FunctionLiteral>),

    /// Application: `function(arguments)`
    Call {
        function: Box<Expr>,
        arguments: Vec<Expr>,
    },
}

/// A function literal: ordered parameter names and a body block.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FunctionLiteral {
    pub parameters: Vec<Name>,
    pub body: BlockStatement,
    pub span: Span,
}

impl FunctionLiteral {
    /// Number of parameters the function expects.
    #[inline]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

impl Spanned for FunctionLiteral {
    fn span(&self) -> Span {
        self.span
    }
}

/// Renders a parameter list as `a, b, c`.
pub struct ParamList<'a>(pub &'a [Name]);

impl fmt::Display for ParamList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, param) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        Ok(())
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn({}) {{ {} }}", ParamList(&self.parameters), self.body)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Identifier(name) => write!(f, "{name}"),
            ExprKind::IntegerLiteral(value) => write!(f, "{value}"),
            ExprKind::BooleanLiteral(value) => write!(f, "{value}"),
            ExprKind::Prefix { op, operand } => write!(f, "({op}{operand})"),
            ExprKind::Infix { op, left, right } => write!(f, "({left} {op} {right})"),
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if {condition} {{ {consequence} }}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{ {alternative} }}")?;
                }
                Ok(())
            }
            ExprKind::Function(literal) => write!(f, "{literal}"),
            ExprKind::Call {
                function,
                arguments,
            } => {
                write!(f, "{function}(")?;
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}
