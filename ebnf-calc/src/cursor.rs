//! Source spans and the parser's token cursor.
use crate::{END_TEXT, SyntaxError, Token};

/// A half-open range of 0-based character columns: `[start, end)`.
///
/// Input is a single line, so a column is enough to locate a lexeme.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Creates a new `Span`.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Is this span empty (start == end)?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Pretty-print for diagnostics, using 1-based columns.
    pub fn display(&self) -> std::string::String {
        format!("columns {} to {}", self.start + 1, self.end)
    }
}

/// Read-only walk over a token sequence that ends with an end marker.
///
/// The cursor only ever moves forward and never moves past the final
/// [`TokenKind::EndOfInput`](crate::TokenKind::EndOfInput) token: advancing
/// while positioned on it is a no-op.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor at index 0.
    ///
    /// `tokens` must hold exactly one end marker, in last position, as every
    /// sequence produced by the lexer does. Otherwise the offending token is
    /// returned as a [`SyntaxError`]: the first end marker that is not last,
    /// the last token of an unterminated sequence, or [`END_TEXT`] at index 0
    /// for an empty one.
    pub fn new(tokens: &'a [Token]) -> Result<Self, SyntaxError> {
        let Some(last) = tokens.len().checked_sub(1) else {
            return Err(SyntaxError::new(END_TEXT, 0));
        };
        match tokens.iter().position(Token::is_end) {
            Some(index) if index == last => Ok(Self { tokens, pos: 0 }),
            Some(index) => Err(SyntaxError::new(tokens[index].text(), index)),
            None => Err(SyntaxError::new(tokens[last].text(), last)),
        }
    }

    /// The token under the cursor.
    #[inline]
    pub fn peek(&self) -> &'a Token {
        // `pos` stops on the end marker, which `new` checked is present
        &self.tokens[self.pos]
    }

    /// 0-based index of the token under the cursor.
    #[inline]
    pub fn index(&self) -> usize {
        self.pos
    }

    /// Moves to the next token and returns the one just passed.
    #[inline]
    pub fn advance(&mut self) -> &'a Token {
        let tok = self.peek();
        if !tok.is_end() {
            self.pos += 1;
        }
        tok
    }

    /// `true` once the cursor rests on the end marker.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.peek().is_end()
    }
}
