use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::*;
use crate::{Name, Span};

fn expr(kind: ExprKind) -> Expr {
    Expr::new(kind, Span::DUMMY)
}

fn ident(name: &str) -> Expr {
    expr(ExprKind::Identifier(Name::new(name)))
}

fn int(value: i64) -> Expr {
    expr(ExprKind::IntegerLiteral(value))
}

fn infix(op: InfixOp, left: Expr, right: Expr) -> Expr {
    expr(ExprKind::Infix {
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}

fn block(statements: Vec<Stmt>) -> BlockStatement {
    BlockStatement {
        statements,
        span: Span::DUMMY,
    }
}

fn stmt(kind: StmtKind) -> Stmt {
    Stmt::new(kind, Span::DUMMY)
}

#[test]
fn let_statement_renders_with_semicolon() {
    let program = Program::new(vec![stmt(StmtKind::Let {
        name: Name::new("myVar"),
        value: ident("anotherVar"),
    })]);
    assert_eq!(program.to_string(), "let myVar = anotherVar;");
}

#[test]
fn operators_render_fully_parenthesised() {
    let sum = infix(
        InfixOp::Add,
        int(1),
        infix(InfixOp::Mul, int(2), int(3)),
    );
    assert_eq!(sum.to_string(), "(1 + (2 * 3))");

    let negated = expr(ExprKind::Prefix {
        op: PrefixOp::Neg,
        operand: Box::new(ident("a")),
    });
    assert_eq!(negated.to_string(), "(-a)");
}

#[test]
fn function_body_renders_as_its_statements() {
    let literal = FunctionLiteral {
        parameters: vec![Name::new("x")],
        body: block(vec![stmt(StmtKind::Expression(infix(
            InfixOp::Add,
            ident("x"),
            int(2),
        )))]),
        span: Span::DUMMY,
    };
    assert_eq!(literal.body.to_string(), "(x + 2)");
    assert_eq!(literal.arity(), 1);

    let call = expr(ExprKind::Call {
        function: Box::new(expr(ExprKind::Function(Rc::new(literal)))),
        arguments: vec![int(5), ident("y")],
    });
    assert_eq!(call.to_string(), "fn(x) { (x + 2) }(5, y)");
}

#[test]
fn if_else_renders_both_branches() {
    let conditional = expr(ExprKind::If {
        condition: Box::new(infix(InfixOp::Lt, ident("x"), ident("y"))),
        consequence: block(vec![stmt(StmtKind::Expression(ident("x")))]),
        alternative: Some(block(vec![stmt(StmtKind::Return(Some(ident("y"))))])),
    });
    assert_eq!(
        conditional.to_string(),
        "if (x < y) { x } else { return y; }"
    );
}

#[test]
fn bare_return_renders_without_operand() {
    assert_eq!(stmt(StmtKind::Return(None)).to_string(), "return;");
}

#[test]
fn precedence_orders_loosest_first() {
    assert!(InfixOp::Eq.precedence() < InfixOp::Lt.precedence());
    assert!(InfixOp::Lt.precedence() < InfixOp::Add.precedence());
    assert!(InfixOp::Add.precedence() < InfixOp::Mul.precedence());
    assert!(InfixOp::Mul.precedence() < Precedence::Prefix);
    assert!(Precedence::Prefix < Precedence::Call);
}

#[test]
fn dropping_a_deep_tree_does_not_recurse() {
    let mut tree = int(1);
    for i in 0..1_000_000 {
        tree = if i % 2 == 0 {
            expr(ExprKind::Prefix {
                op: PrefixOp::Neg,
                operand: Box::new(tree),
            })
        } else {
            infix(InfixOp::Add, tree, int(1))
        };
    }
    let program = Program::new(vec![stmt(StmtKind::Expression(tree))]);
    drop(program);
}

#[test]
fn dropping_a_tree_leaves_shared_function_literals_intact() {
    let literal = Rc::new(FunctionLiteral {
        parameters: vec![Name::new("x")],
        body: block(vec![stmt(StmtKind::Expression(ident("x")))]),
        span: Span::DUMMY,
    });
    let tree = expr(ExprKind::Function(Rc::clone(&literal)));
    drop(tree);
    assert_eq!(literal.to_string(), "fn(x) { x }");
}
