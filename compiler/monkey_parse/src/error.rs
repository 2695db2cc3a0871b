//! Parse error types.
//!
//! Every error carries the span it points at and, when known, the construct
//! being parsed so messages read "expected `)`, found `}` while parsing an
//! if expression".

use std::fmt;

use monkey_ir::Span;
use monkey_lexer::{LexError, LexErrorKind, Token};

/// What was being parsed when an error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    LetStatement,
    ReturnStatement,
    Grouping,
    IfExpression,
    Block,
    FunctionLiteral,
    FunctionParams,
    CallArguments,
}

impl ErrorContext {
    /// Phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::LetStatement => "a let statement",
            Self::ReturnStatement => "a return statement",
            Self::Grouping => "a parenthesized expression",
            Self::IfExpression => "an if expression",
            Self::Block => "a block",
            Self::FunctionLiteral => "a function literal",
            Self::FunctionParams => "function parameters",
            Self::CallArguments => "call arguments",
        }
    }
}

/// Structured parse error kinds.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// A specific token was required but something else was there.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },

    /// No expression can start with the current token.
    #[error("expected an expression, found {found}")]
    ExpectedExpression { found: String },

    /// The source did not lex.
    #[error(transparent)]
    Lex(LexErrorKind),
}

/// A parse error with location and optional context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub context: Option<ErrorContext>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError {
            kind,
            span,
            context: None,
        }
    }

    /// Attach the construct being parsed, keeping an existing (inner) context.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }

    #[cold]
    pub fn unexpected_token(expected: &'static str, found: &Token, context: ErrorContext) -> Self {
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected,
                found: found.kind.to_string(),
            },
            found.span,
        )
        .with_context(context)
    }

    #[cold]
    pub fn expected_expression(found: &Token) -> Self {
        ParseError::new(
            ParseErrorKind::ExpectedExpression {
                found: found.kind.to_string(),
            },
            found.span,
        )
    }

    /// Short label for the primary diagnostic span.
    pub fn label(&self) -> &'static str {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { .. } => "unexpected token",
            ParseErrorKind::ExpectedExpression { .. } => "expected an expression here",
            ParseErrorKind::Lex(_) => "invalid token",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(context) = self.context {
            write!(f, " while parsing {}", context.description())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::new(ParseErrorKind::Lex(err.kind), err.span)
    }
}
