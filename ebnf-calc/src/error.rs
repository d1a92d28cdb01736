//! # Calculator Error Types
//!
//! This module defines the errors the pipeline can report:
//!
//! - [`LexicalError`]: a character sequence that cannot form a token,
//! - [`SyntaxError`]: a token that does not fit the grammar where it appears,
//! - [`CalcError`]: the single error surface of [`evaluate`](crate::evaluate).
//!
//! Lexical errors are collected: the lexer keeps scanning after one so that
//! every illegal character of a line is reported. A syntax error stops the
//! parse at once, so a run yields at most one.
use smartstring::alias::String;
use thiserror::Error;

/// A lexeme that could not be completed into a token.
///
/// `position` is the 1-based character position where the offending text
/// ended.
///
/// # Example
/// ```rust
/// # use ebnf_calc::LexicalError;
/// let err = LexicalError::new("&", 3);
/// assert_eq!(err.to_string(), "Lexical Error at position 3 illegal character: &");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Lexical Error at position {position} illegal character: {text}")]
pub struct LexicalError {
    /// The rejected text.
    pub text: String,
    /// 1-based character position of the last rejected character.
    pub position: usize,
}

impl LexicalError {
    pub fn new(text: impl AsRef<str>, position: usize) -> Self {
        Self {
            text: String::from(text.as_ref()),
            position,
        }
    }
}

/// A token that violates the grammar.
///
/// `position` is the 0-based index of the token in the token sequence; the
/// message reports it 1-based.
///
/// # Example
/// ```rust
/// # use ebnf_calc::SyntaxError;
/// let err = SyntaxError::new("eof", 2);
/// assert_eq!(err.to_string(), "Syntax error not allowed token: eof at position 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Syntax error not allowed token: {token} at position {}", .position + 1)]
pub struct SyntaxError {
    /// Text of the offending token.
    pub token: String,
    /// 0-based index of the offending token.
    pub position: usize,
}

impl SyntaxError {
    pub fn new(token: impl AsRef<str>, position: usize) -> Self {
        Self {
            token: String::from(token.as_ref()),
            position,
        }
    }
}

/// Represents everything that can make a line fail to evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// One or more lexical errors; the line was never parsed.
    #[error("{} lexical error(s), first: {}", .0.len(), display_first(.0))]
    Lexical(Vec<LexicalError>),

    /// The parse stopped at the first token that violated the grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl CalcError {
    /// Human-readable lines, one per underlying error, in report order.
    pub fn messages(&self) -> Vec<std::string::String> {
        match self {
            Self::Lexical(errors) => errors.iter().map(ToString::to_string).collect(),
            Self::Syntax(err) => vec![err.to_string()],
        }
    }
}

fn display_first(errors: &[LexicalError]) -> std::string::String {
    errors
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

impl From<Vec<LexicalError>> for CalcError {
    fn from(errors: Vec<LexicalError>) -> Self {
        Self::Lexical(errors)
    }
}
