//! Token cursor for navigating the token stream.
//!
//! Provides token access, one-token lookahead, and consumption methods.

use std::mem::discriminant;

use monkey_ir::{Name, Span};
use monkey_lexer::{Token, TokenKind};

use crate::error::{ErrorContext, ParseError};

/// Cursor over a token slice that always ends in `Eof`.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    ///
    /// `tokens` must be non-empty and end with `Eof`, which is what
    /// `monkey_lexer::lex` produces.
    pub fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            matches!(tokens.last(), Some(t) if t.kind == TokenKind::Eof),
            "token stream must end with Eof"
        );
        Cursor { tokens, pos: 0 }
    }

    /// Get the current position in the token stream.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the current token.
    ///
    /// Never moves past the final `Eof`, so this always has a token to return.
    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token has the same kind as `kind`.
    ///
    /// Payloads are ignored, so `check(&TokenKind::Int(0))` matches any integer.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        discriminant(self.current_kind()) == discriminant(kind)
    }

    /// Consume the current token and return it. Stays put at `Eof`.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume a token of the given kind or fail with an error naming it.
    pub fn expect(&mut self, kind: &TokenKind, context: ErrorContext) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(ParseError::unexpected_token(
                kind.display_name(),
                self.current(),
                context,
            ))
        }
    }

    /// Consume an identifier and return its name.
    pub fn expect_ident(&mut self, context: ErrorContext) -> Result<(Name, Span), ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            let span = self.advance().span;
            Ok((name.clone(), span))
        } else {
            Err(ParseError::unexpected_token(
                "an identifier",
                self.current(),
                context,
            ))
        }
    }

    /// Consume the current token if it is `kind`. Returns whether it did.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skip tokens up to and including the next `;`, or up to `Eof`.
    ///
    /// Always consumes at least one token unless already at `Eof`, so the
    /// statement loop is guaranteed to make progress.
    pub fn synchronize(&mut self) {
        while !self.is_at_end() {
            let token = self.advance();
            if token.kind == TokenKind::Semicolon {
                return;
            }
        }
    }
}
