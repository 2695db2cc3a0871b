//! Recursive descent parser for Monkey.
//!
//! Statements are parsed by recursive descent, expressions by precedence
//! climbing over `monkey_ir::Precedence`. A statement that fails to parse is
//! recorded and skipped up to the next `;`, so one pass reports every
//! independent syntax error.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError, ParseErrorKind};

use monkey_ir::{Program, Span};
use monkey_lexer::{Token, TokenKind, TokenList};
use tracing::debug;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Create a parser over a token stream ending in `Eof`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            errors: Vec::new(),
        }
    }

    #[inline]
    fn current(&self) -> &'a Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> &'a TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    /// Parse a whole program, collecting errors statement by statement.
    pub fn parse_program(mut self) -> Result<Program, Vec<ParseError>> {
        let mut statements = Vec::new();

        while !self.cursor.is_at_end() {
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    debug!(error = %err, span = ?err.span, "statement failed to parse");
                    self.errors.push(err);
                    self.cursor.synchronize();
                }
            }
        }

        if self.errors.is_empty() {
            Ok(Program::new(statements))
        } else {
            Err(self.errors)
        }
    }
}

/// Lex and parse `source`.
///
/// Lex errors are reported as parse errors of kind `ParseErrorKind::Lex`;
/// when lexing fails the parser does not run.
pub fn parse(source: &str) -> Result<Program, Vec<ParseError>> {
    let tokens = monkey_lexer::lex(source)
        .map_err(|errors| errors.into_iter().map(ParseError::from).collect::<Vec<_>>())?;
    parse_tokens(&tokens)
}

/// Lex and parse `source` as if it started `offset` bytes into a larger
/// buffer. Every span in the tree and in the errors is shifted by `offset`.
pub fn parse_at(source: &str, offset: u32) -> Result<Program, Vec<ParseError>> {
    let tokens = monkey_lexer::lex(source).map_err(|errors| {
        errors
            .into_iter()
            .map(|err| {
                let mut err = ParseError::from(err);
                err.span = err.span.shifted(offset);
                err
            })
            .collect::<Vec<_>>()
    })?;
    let shifted = tokens
        .iter()
        .map(|token| Token::new(token.kind.clone(), token.span.shifted(offset)))
        .collect();
    parse_tokens(&TokenList::new(shifted))
}

/// Parse an already lexed token stream.
pub fn parse_tokens(tokens: &TokenList) -> Result<Program, Vec<ParseError>> {
    if tokens.is_empty() {
        return Ok(Program::default());
    }
    Parser::new(tokens.as_slice()).parse_program()
}

#[cfg(test)]
mod tests;
