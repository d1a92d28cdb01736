//! # ebnf-calc
//!
//! Evaluates one line of integer arithmetic (`+ - * /`) with a finite-state
//! lexer and a recursive-descent parser that computes the value as it
//! recognizes the grammar.
//!
//! ## Overview
//!
//! - [`alphabet`] — character classes ([`CharClass`]) that drive the lexer.
//! - [`lexer`] — the [`Lexer`] automaton turning a line into [`Token`]s and
//!   [`LexicalError`]s.
//! - [`token`] — [`Token`], [`TokenKind`] and [`Operator`].
//! - [`cursor`] — source [`Span`]s and the parser's [`TokenCursor`].
//! - [`parser`] — the [`ExprParser`] evaluating `Expr`/`ER`/`Term`/`TR`/`Factor`.
//! - [`error`] — [`LexicalError`], [`SyntaxError`] and [`CalcError`].
//!
//! ## Example
//!
//! ```rust
//! use ebnf_calc::{CalcError, LexicalError, SyntaxError, evaluate};
//!
//! assert_eq!(evaluate("5 + 3"), Ok(8.0));
//! assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
//! assert_eq!(
//!     evaluate("5 & 3"),
//!     Err(CalcError::Lexical(vec![LexicalError::new("&", 3)]))
//! );
//! assert_eq!(
//!     evaluate("5 +"),
//!     Err(CalcError::Syntax(SyntaxError::new("eof", 2)))
//! );
//! ```
pub mod alphabet;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

pub use alphabet::CharClass;
pub use cursor::{Span, TokenCursor};
pub use error::{CalcError, LexicalError, SyntaxError};
pub use lexer::{Lexed, Lexer, LexerState, LexerStats};
pub use parser::ExprParser;
pub use token::{END_TEXT, Operator, Token, TokenKind};

/// Tokenizes `line`, returning every token and every lexical error.
///
/// # Example
/// ```rust
/// # use ebnf_calc::tokenize;
/// let lexed = tokenize("0 0");
/// assert_eq!(lexed.tokens.len(), 3);
/// assert!(lexed.is_ok());
/// ```
pub fn tokenize(line: &str) -> Lexed {
    Lexer::tokenize(line)
}

/// Runs the whole pipeline on one line: lex, then parse and evaluate.
///
/// If the lexer reports any error the line is not parsed and all lexical
/// errors are returned together. Otherwise the value of the expression, or
/// the first syntax error, is returned.
pub fn evaluate(line: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(line).into_result()?;
    let value = ExprParser::new(&tokens)?.parse()?;
    Ok(value)
}
