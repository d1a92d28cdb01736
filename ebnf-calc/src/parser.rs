//! # Expression Parser
//!
//! A recursive-descent parser that evaluates while it recognizes. Each
//! nonterminal of the grammar is one method returning the value of the
//! production it matched:
//!
//! ```text
//! Expr   -> Term ER                      Term + ER
//! ER     -> "+" Term ER                  Term + ER
//!         | "-" Term ER                  -Term + ER
//!         | ε                            0
//! Term   -> Factor TR                    Factor * TR
//! TR     -> "*" Factor TR                Factor * TR
//!         | "/" Factor TR                (1 / Factor) * TR
//!         | ε                            1
//! Factor -> number                       value of the literal
//! ```
//!
//! The parse is a single left-to-right pass without backtracking; no syntax
//! tree is built. Precedence comes from the two grammar levels: `*` and `/`
//! bind tighter than `+` and `-`. The sign of a subtracted term and the
//! reciprocal of a divisor are applied to that operand alone before it joins
//! the right-recursive tail, so `9 - 3 - 2` is `9 + (-3) + (-2)`.
//! This is a deliberate departure from a right-associative reading of the
//! grammar: `9 - 3 - 2` evaluates to `4`, not `9 - (3 - 2) = 8`, and
//! `8 / 4 / 2` to `1`, not `8 / (4 / 2) = 4`.
//!
//! ε is taken only on a token that may follow the nonterminal: the end marker
//! for `ER`, and `+`, `-` or the end marker for `TR`. Any other token is a
//! [`SyntaxError`], which is returned at once and ends the parse.
use crate::{Operator, SyntaxError, Token, TokenCursor, TokenKind};

/// The parser/evaluator over a lexed token sequence.
///
/// The parser owns the only cursor into the tokens; the grammar methods share
/// it through `&mut self`.
///
/// # Example
/// ```rust
/// # use ebnf_calc::{ExprParser, Lexer};
/// let tokens = Lexer::tokenize("2 + 3 * 4").into_result().unwrap();
/// assert_eq!(ExprParser::new(&tokens).and_then(ExprParser::parse), Ok(14.0));
/// ```
#[derive(Debug, Clone)]
pub struct ExprParser<'a> {
    cursor: TokenCursor<'a>,
}

impl<'a> ExprParser<'a> {
    /// Creates a parser positioned on the first token.
    ///
    /// `tokens` must hold a single end-of-input token, in last position, as
    /// every sequence produced by [`Lexer`](crate::Lexer) does. Any other
    /// sequence is rejected with the [`SyntaxError`] from [`TokenCursor::new`].
    pub fn new(tokens: &'a [Token]) -> Result<Self, SyntaxError> {
        Ok(Self {
            cursor: TokenCursor::new(tokens)?,
        })
    }

    /// Parses one complete expression and returns its value.
    ///
    /// Succeeds only if the whole token sequence up to the end marker forms
    /// a single expression: `ER` takes ε on the end marker alone, so an `Ok`
    /// from [`expr`](Self::expr) leaves the cursor there.
    pub fn parse(mut self) -> Result<f64, SyntaxError> {
        let value = self.expr()?;
        log::debug!("VALUE: {value}");
        Ok(value)
    }

    /// Index of the token under the cursor.
    pub fn position(&self) -> usize {
        self.cursor.index()
    }

    fn expr(&mut self) -> Result<f64, SyntaxError> {
        log::trace!("EXPR at {}", self.position());
        Ok(self.term()? + self.er()?)
    }

    fn er(&mut self) -> Result<f64, SyntaxError> {
        log::trace!("ER at {}", self.position());
        match self.cursor.peek().kind() {
            TokenKind::Operator(Operator::Plus) => {
                self.cursor.advance();
                Ok(self.term()? + self.er()?)
            }
            TokenKind::Operator(Operator::Minus) => {
                self.cursor.advance();
                Ok(-self.term()? + self.er()?)
            }
            TokenKind::EndOfInput => Ok(0.0),
            _ => Err(self.unexpected()),
        }
    }

    fn term(&mut self) -> Result<f64, SyntaxError> {
        log::trace!("TERM at {}", self.position());
        Ok(self.factor()? * self.tr()?)
    }

    fn tr(&mut self) -> Result<f64, SyntaxError> {
        log::trace!("TR at {}", self.position());
        match self.cursor.peek().kind() {
            TokenKind::Operator(Operator::Asterisk) => {
                self.cursor.advance();
                Ok(self.factor()? * self.tr()?)
            }
            TokenKind::Operator(Operator::Slash) => {
                self.cursor.advance();
                Ok((1.0 / self.factor()?) * self.tr()?)
            }
            TokenKind::Operator(op) if op.is_additive() => Ok(1.0),
            TokenKind::EndOfInput => Ok(1.0),
            _ => Err(self.unexpected()),
        }
    }

    fn factor(&mut self) -> Result<f64, SyntaxError> {
        log::trace!("FACTOR at {}", self.position());
        let index = self.position();
        let tok = self.cursor.peek();
        if tok.kind() != TokenKind::Number {
            return Err(self.unexpected());
        }
        self.cursor.advance();
        // digit strings always parse; very long ones round to the nearest f64
        tok.text()
            .parse::<f64>()
            .map_err(|_| SyntaxError::new(tok.text(), index))
    }

    /// A syntax error naming the token under the cursor.
    fn unexpected(&self) -> SyntaxError {
        let tok = self.cursor.peek();
        log::debug!(
            "SYNTAX ERROR: {:?} at index {} ({})",
            tok.text(),
            self.position(),
            tok.span().display()
        );
        SyntaxError::new(tok.text(), self.position())
    }
}
