//! Statement parsing.

use monkey_ir::{BlockStatement, Precedence, Stmt, StmtKind};
use monkey_lexer::TokenKind;
use tracing::trace;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse one statement. A trailing `;` is optional and consumed if present.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        trace!(pos = self.cursor.position(), token = %self.current_kind(), "parse_statement");
        match self.current_kind() {
            TokenKind::Let => self.parse_let(),
            TokenKind::Return => self.parse_return(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <ident> = <expr>`
    fn parse_let(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let (name, _) = self.cursor.expect_ident(ErrorContext::LetStatement)?;
        self.cursor
            .expect(&TokenKind::Assign, ErrorContext::LetStatement)?;
        let value = self
            .parse_expression(Precedence::Lowest)
            .map_err(|e| e.with_context(ErrorContext::LetStatement))?;
        self.cursor.eat(&TokenKind::Semicolon);

        let span = start.merge(self.previous_span());
        Ok(Stmt::new(StmtKind::Let { name, value }, span))
    }

    /// `return <expr>` or a bare `return` before `;`, `}` or end of input.
    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let value = match self.current_kind() {
            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof => None,
            _ => Some(
                self.parse_expression(Precedence::Lowest)
                    .map_err(|e| e.with_context(ErrorContext::ReturnStatement))?,
            ),
        };
        self.cursor.eat(&TokenKind::Semicolon);

        let span = start.merge(self.previous_span());
        Ok(Stmt::new(StmtKind::Return(value), span))
    }

    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        let span = if self.cursor.eat(&TokenKind::Semicolon) {
            expr.span.merge(self.previous_span())
        } else {
            expr.span
        };
        Ok(Stmt::new(StmtKind::Expression(expr), span))
    }

    /// `{ <stmt>* }`
    ///
    /// Errors inside a block are not recovered locally; they abort the
    /// enclosing top-level statement.
    pub(crate) fn parse_block(&mut self, context: ErrorContext) -> Result<BlockStatement, ParseError> {
        let start = self.cursor.expect(&TokenKind::LBrace, context)?;
        let mut statements = Vec::new();

        while !self.check(&TokenKind::RBrace) && !self.cursor.is_at_end() {
            statements.push(self.parse_statement()?);
        }
        let end = self.cursor.expect(&TokenKind::RBrace, ErrorContext::Block)?;

        Ok(BlockStatement {
            statements,
            span: start.merge(end),
        })
    }
}
