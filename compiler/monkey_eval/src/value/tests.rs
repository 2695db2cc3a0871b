use std::rc::Rc;

use monkey_ir::{BlockStatement, Expr, ExprKind, FunctionLiteral, InfixOp, Name, Span, Stmt, StmtKind};
use pretty_assertions::assert_eq;

use super::*;
use crate::errors::{division_by_zero, identifier_not_found};

fn add_two_literal() -> Rc<FunctionLiteral> {
    let x = Expr::new(ExprKind::Identifier(Name::new("x")), Span::DUMMY);
    let two = Expr::new(ExprKind::IntegerLiteral(2), Span::DUMMY);
    let sum = Expr::new(
        ExprKind::Infix {
            op: InfixOp::Add,
            left: Box::new(x),
            right: Box::new(two),
        },
        Span::DUMMY,
    );
    Rc::new(FunctionLiteral {
        parameters: vec![Name::new("x")],
        body: BlockStatement {
            statements: vec![Stmt::new(StmtKind::Expression(sum), Span::DUMMY)],
            span: Span::DUMMY,
        },
        span: Span::DUMMY,
    })
}

#[test]
fn type_tags() {
    let function = Value::function(FunctionValue::new(add_two_literal(), Environment::default()));
    let tags: Vec<&str> = [
        Value::Integer(1),
        TRUE,
        NULL,
        Value::return_value(NULL),
        Value::error(division_by_zero()),
        function,
    ]
    .iter()
    .map(Value::type_name)
    .collect();
    assert_eq!(
        tags,
        vec!["INTEGER", "BOOLEAN", "NULL", "RETURN_VALUE", "ERROR", "FUNCTION"]
    );
}

#[test]
fn inspect_renders_each_variant() {
    assert_eq!(Value::Integer(-12).inspect(), "-12");
    assert_eq!(TRUE.inspect(), "true");
    assert_eq!(FALSE.inspect(), "false");
    assert_eq!(NULL.inspect(), "null");
    assert_eq!(Value::return_value(Value::Integer(3)).inspect(), "3");
    assert_eq!(
        Value::error(identifier_not_found("foobar")).inspect(),
        "ERROR: identifier not found: foobar"
    );
    let function = Value::function(FunctionValue::new(add_two_literal(), Environment::default()));
    assert_eq!(function.inspect(), "fn(x) {\n(x + 2)\n}");
}

#[test]
fn truthiness() {
    assert!(TRUE.is_truthy());
    assert!(!FALSE.is_truthy());
    assert!(!NULL.is_truthy());
    assert!(Value::Integer(0).is_truthy());
    assert!(Value::Integer(-1).is_truthy());
}

#[test]
fn booleans_are_singletons() {
    assert!(Value::from_bool(true).is_identical(&TRUE));
    assert!(Value::from(false).is_identical(&FALSE));
    assert!(!TRUE.is_identical(&FALSE));
    assert!(NULL.is_identical(&Value::Null));
}

#[test]
fn functions_compare_by_identity() {
    let literal = add_two_literal();
    let env = Environment::default();
    let a = Value::function(FunctionValue::new(Rc::clone(&literal), env.clone()));
    let b = Value::function(FunctionValue::new(literal, env));
    assert!(a.is_identical(&a.clone()));
    assert!(!a.is_identical(&b));
}

#[test]
fn identity_across_types_is_false() {
    assert!(!Value::Integer(1).is_identical(&TRUE));
    assert!(!NULL.is_identical(&FALSE));
}

#[test]
fn unwrap_return_strips_one_layer() {
    let nested = Value::return_value(Value::return_value(Value::Integer(1)));
    assert_eq!(
        nested.unwrap_return(),
        Value::return_value(Value::Integer(1))
    );
    assert_eq!(Value::Integer(5).unwrap_return(), Value::Integer(5));
}

#[test]
fn signals() {
    assert!(Value::error(division_by_zero()).is_signal());
    assert!(Value::return_value(NULL).is_signal());
    assert!(!NULL.is_signal());
    assert!(Value::error(division_by_zero()).is_error());
    assert!(!Value::return_value(NULL).is_error());
}
