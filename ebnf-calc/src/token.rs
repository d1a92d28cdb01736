//! # Tokens
//!
//! This module defines the token type produced by the lexer and consumed by
//! the parser:
//!
//! - [`Operator`]: the four binary operators of the expression language,
//! - [`TokenKind`]: the category of a token (number, operator, end marker),
//! - [`Token`]: an immutable lexeme paired with its kind and source span.
//!
//! Every token sequence produced by the lexer ends with exactly one
//! [`TokenKind::EndOfInput`] token whose text is [`END_TEXT`].
use crate::Span;
use smartstring::alias::String;
use std::fmt;

/// Text carried by the end-of-input token. It is what a syntax error names
/// when the line ends where an operand was expected.
pub const END_TEXT: &str = "eof";

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Asterisk,
    Slash,
}

impl Operator {
    /// Maps an operator character to its [`Operator`].
    ///
    /// Returns `None` for characters outside `+ - * /`.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Asterisk),
            '/' => Some(Self::Slash),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Asterisk => '*',
            Self::Slash => '/',
        }
    }

    /// `true` for `+` and `-`, the operators handled by the additive level
    /// of the grammar.
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A non-negative integer literal.
    Number,
    /// A single operator character.
    Operator(Operator),
    /// The end-of-input marker appended after the last lexeme.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "Number"),
            Self::Operator(_) => write!(f, "Operator"),
            Self::EndOfInput => write!(f, "EndOfInput"),
        }
    }
}

/// A classified lexeme.
///
/// Tokens are created by the lexer and never modified afterwards; the parser
/// only reads them.
///
/// # Example
/// ```rust
/// # use ebnf_calc::{Span, Token, TokenKind, Operator};
/// let tok = Token::operator(Operator::Minus, 4);
/// assert_eq!(tok.text(), "-");
/// assert_eq!(tok.kind(), TokenKind::Operator(Operator::Minus));
/// assert_eq!(tok.span(), Span::new(4, 5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    span: Span,
}

impl Token {
    /// A number token for the digit string `digits` spanning `span`.
    pub fn number(digits: impl AsRef<str>, span: Span) -> Self {
        Self {
            kind: TokenKind::Number,
            text: String::from(digits.as_ref()),
            span,
        }
    }

    /// An operator token at 0-based column `column`.
    pub fn operator(op: Operator, column: usize) -> Self {
        let mut text = String::new();
        text.push(op.as_char());
        Self {
            kind: TokenKind::Operator(op),
            text,
            span: Span::new(column, column + 1),
        }
    }

    /// The end-of-input token for a line of `len` characters.
    pub fn end(len: usize) -> Self {
        Self {
            kind: TokenKind::EndOfInput,
            text: String::from(END_TEXT),
            span: Span::new(len, len),
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The lexeme, or [`END_TEXT`] for the end marker.
    #[inline]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    /// Formats as `text kind`, the layout of the token dump.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.text, self.kind)
    }
}
