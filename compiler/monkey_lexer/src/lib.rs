//! Lexer for Monkey using logos.
//!
//! Converts source text into a `TokenList` terminated by `Eof`. Whitespace
//! and `//` line comments are skipped. Lexing does not stop at the first bad
//! character: every lexical error is collected and reported together.

mod token;

use logos::Logos;
use monkey_ir::{Name, Span};

pub use token::{Token, TokenKind, TokenList};

/// Raw token from logos (before conversion).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
enum RawToken {
    // Keywords
    #[token("fn")]
    Fn,
    #[token("let")]
    Let,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,

    // Operators
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("!")]
    Bang,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // Delimiters
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Literals
    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// What went wrong while lexing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unexpected character `{0}`")]
    UnexpectedChar(char),
    #[error("integer literal `{0}` does not fit in a 64-bit signed integer")]
    IntegerOutOfRange(String),
    #[error("source of {0} bytes is too large to lex")]
    SourceTooLarge(usize),
}

/// A lexical error with its location.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }
}

/// Lex `source` into tokens.
///
/// On success the list always ends with exactly one `Eof` token whose span is
/// the empty range at the end of the source.
pub fn lex(source: &str) -> Result<TokenList, Vec<LexError>> {
    let Ok(end) = u32::try_from(source.len()) else {
        return Err(vec![LexError::new(
            LexErrorKind::SourceTooLarge(source.len()),
            Span::DUMMY,
        )]);
    };

    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut raw = RawToken::lexer(source);

    while let Some(result) = raw.next() {
        // Offsets are bounded by `end`, which fits in u32.
        let span = Span::try_from_range(raw.span()).unwrap_or(Span::DUMMY);
        let slice = raw.slice();
        match result {
            Ok(token) => match convert(token, slice) {
                Ok(kind) => tokens.push(Token::new(kind, span)),
                Err(kind) => errors.push(LexError::new(kind, span)),
            },
            Err(()) => {
                let c = slice.chars().next().unwrap_or('\0');
                errors.push(LexError::new(LexErrorKind::UnexpectedChar(c), span));
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    tokens.push(Token::new(TokenKind::Eof, Span::new(end, end)));
    Ok(TokenList::new(tokens))
}

fn convert(raw: RawToken, slice: &str) -> Result<TokenKind, LexErrorKind> {
    Ok(match raw {
        RawToken::Fn => TokenKind::Fn,
        RawToken::Let => TokenKind::Let,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::Return => TokenKind::Return,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Int => TokenKind::Int(
            slice
                .parse::<i64>()
                .map_err(|_| LexErrorKind::IntegerOutOfRange(slice.to_string()))?,
        ),
        RawToken::Ident => TokenKind::Ident(Name::new(slice)),
    })
}
