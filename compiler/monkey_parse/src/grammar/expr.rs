//! Expression parsing.
//!
//! Precedence climbing: parse a prefix form, then keep folding infix
//! operators and call parentheses into it while the next token binds more
//! tightly than the caller's precedence. Equal precedence stops the loop,
//! which makes every binary operator left-associative.

use std::rc::Rc;

use monkey_ir::{Expr, ExprKind, FunctionLiteral, InfixOp, Precedence, PrefixOp};
use monkey_lexer::TokenKind;
use monkey_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ErrorContext, ParseError, Parser};

/// Map a token to the infix operator it spells, if any.
fn infix_op(kind: &TokenKind) -> Option<InfixOp> {
    Some(match kind {
        TokenKind::Plus => InfixOp::Add,
        TokenKind::Minus => InfixOp::Sub,
        TokenKind::Star => InfixOp::Mul,
        TokenKind::Slash => InfixOp::Div,
        TokenKind::Lt => InfixOp::Lt,
        TokenKind::Gt => InfixOp::Gt,
        TokenKind::EqEq => InfixOp::Eq,
        TokenKind::NotEq => InfixOp::NotEq,
        _ => return None,
    })
}

/// Binding power of a token in infix position.
fn infix_precedence(kind: &TokenKind) -> Precedence {
    match kind {
        TokenKind::LParen => Precedence::Call,
        other => infix_op(other).map_or(Precedence::Lowest, InfixOp::precedence),
    }
}

impl Parser<'_> {
    /// Parse an expression whose operators all bind tighter than `precedence`.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_expression_inner(precedence))
    }

    fn parse_expression_inner(&mut self, precedence: Precedence) -> Result<Expr, ParseError> {
        let mut left = self.parse_prefix()?;

        while precedence < infix_precedence(self.current_kind()) {
            left = if self.check(&TokenKind::LParen) {
                self.parse_call(left)?
            } else {
                self.parse_infix(left)?
            };
        }

        Ok(left)
    }

    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let token = self.current();
        trace!(pos = self.cursor.position(), token = %token.kind, "parse_prefix");

        let kind = match &token.kind {
            TokenKind::Ident(name) => ExprKind::Identifier(name.clone()),
            TokenKind::Int(value) => ExprKind::IntegerLiteral(*value),
            TokenKind::True => ExprKind::BooleanLiteral(true),
            TokenKind::False => ExprKind::BooleanLiteral(false),
            TokenKind::Bang => return self.parse_prefix_op(PrefixOp::Not),
            TokenKind::Minus => return self.parse_prefix_op(PrefixOp::Neg),
            TokenKind::LParen => return self.parse_grouping(),
            TokenKind::If => return self.parse_if(),
            TokenKind::Fn => return self.parse_function_literal(),
            _ => return Err(ParseError::expected_expression(token)),
        };
        self.advance();
        Ok(Expr::new(kind, token.span))
    }

    /// `!x` or `-x`; the operand binds at prefix strength so `-a * b` is `(-a) * b`.
    fn parse_prefix_op(&mut self, op: PrefixOp) -> Result<Expr, ParseError> {
        let start = self.advance().span;
        let operand = self.parse_expression(Precedence::Prefix)?;
        let span = start.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Prefix {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    /// `( <expr> )`. The parentheses leave no node behind, only a wider span.
    fn parse_grouping(&mut self) -> Result<Expr, ParseError> {
        let start = self.advance().span;
        let mut inner = self
            .parse_expression(Precedence::Lowest)
            .map_err(|e| e.with_context(ErrorContext::Grouping))?;
        let end = self.cursor.expect(&TokenKind::RParen, ErrorContext::Grouping)?;
        inner.span = start.merge(end);
        Ok(inner)
    }

    fn parse_infix(&mut self, left: Expr) -> Result<Expr, ParseError> {
        let token = self.current();
        let Some(op) = infix_op(&token.kind) else {
            return Err(ParseError::expected_expression(token));
        };
        self.advance();

        let right = self.parse_expression(op.precedence())?;
        let span = left.span.merge(right.span);
        Ok(Expr::new(
            ExprKind::Infix {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        ))
    }

    /// `if ( <cond> ) { ... } [else { ... }]`
    fn parse_if(&mut self) -> Result<Expr, ParseError> {
        let start = self.advance().span;
        self.cursor
            .expect(&TokenKind::LParen, ErrorContext::IfExpression)?;
        let condition = self
            .parse_expression(Precedence::Lowest)
            .map_err(|e| e.with_context(ErrorContext::IfExpression))?;
        self.cursor
            .expect(&TokenKind::RParen, ErrorContext::IfExpression)?;
        let consequence = self.parse_block(ErrorContext::IfExpression)?;

        let alternative = if self.cursor.eat(&TokenKind::Else) {
            Some(self.parse_block(ErrorContext::IfExpression)?)
        } else {
            None
        };

        let span = start.merge(self.previous_span());
        Ok(Expr::new(
            ExprKind::If {
                condition: Box::new(condition),
                consequence,
                alternative,
            },
            span,
        ))
    }

    /// `fn ( <ident>, ... ) { ... }`
    fn parse_function_literal(&mut self) -> Result<Expr, ParseError> {
        let start = self.advance().span;
        self.cursor
            .expect(&TokenKind::LParen, ErrorContext::FunctionLiteral)?;

        let mut parameters = Vec::new();
        if !self.cursor.eat(&TokenKind::RParen) {
            loop {
                let (name, _) = self.cursor.expect_ident(ErrorContext::FunctionParams)?;
                parameters.push(name);
                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
            }
            self.cursor
                .expect(&TokenKind::RParen, ErrorContext::FunctionParams)?;
        }

        let body = self.parse_block(ErrorContext::FunctionLiteral)?;
        let span = start.merge(self.previous_span());
        let literal = FunctionLiteral {
            parameters,
            body,
            span,
        };
        Ok(Expr::new(ExprKind::Function(Rc::new(literal)), span))
    }

    /// `<callee> ( <expr>, ... )`
    fn parse_call(&mut self, function: Expr) -> Result<Expr, ParseError> {
        trace!(callee = %function, at = ?self.current_span(), "parse_call");
        self.advance();

        let mut arguments = Vec::new();
        if !self.cursor.eat(&TokenKind::RParen) {
            loop {
                let argument = self
                    .parse_expression(Precedence::Lowest)
                    .map_err(|e| e.with_context(ErrorContext::CallArguments))?;
                arguments.push(argument);
                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
            }
            self.cursor
                .expect(&TokenKind::RParen, ErrorContext::CallArguments)?;
        }

        let span = function.span.merge(self.previous_span());
        Ok(Expr::new(
            ExprKind::Call {
                function: Box::new(function),
                arguments,
            },
            span,
        ))
    }
}
