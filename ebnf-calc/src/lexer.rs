//! # Lexer
//!
//! A finite-state tokenizer over one line of input. Each character is
//! classified by [`CharClass::of`] and fed through a transition table indexed
//! by `(LexerState, CharClass)`. The accumulated lexeme is flushed as a
//! [`Token`] whenever the next character cannot extend it; the character is
//! then re-evaluated from [`LexerState::Start`].
//!
//! ```text
//!              1-9          0          op        ws / illegal
//! Start        InNumber     LeadingZero Operator Error
//! InNumber     InNumber     InNumber    Error    Error
//! LeadingZero  Error        Error       Error    Error
//! Operator     Error        Error       Error    Error
//! ```
//!
//! `LeadingZero` and `Operator` never extend: `03` lexes as `0` then `3`,
//! and `++` as two `+` tokens. Whitespace separates lexemes and is dropped.
//! Any other character is reported as a [`LexicalError`]; scanning continues
//! so that every offending character of the line is reported.
use crate::alphabet::{self, CharClass};
use crate::{LexicalError, Operator, Span, Token};
use smartstring::alias::String;
use std::mem;

/// A state of the lexer automaton.
///
/// [`LexerState::Error`] is a sentinel returned by [`LexerState::next`]; the
/// lexer never stays in it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LexerState {
    #[default]
    Start,
    InNumber,
    LeadingZero,
    Operator,
    Error,
}

use LexerState::{Error as E, InNumber as N, LeadingZero as Z, Operator as O};

/// Rows follow `LexerState`, columns follow `CharClass`.
const TRANSITIONS: [[LexerState; CharClass::COUNT]; LexerState::COUNT] = [
    // NonZeroDigit, Zero, Operator, Whitespace, Illegal
    [N, Z, O, E, E], // Start
    [N, N, E, E, E], // InNumber
    [E, E, E, E, E], // LeadingZero
    [E, E, E, E, E], // Operator
    [E, E, E, E, E], // Error
];

impl LexerState {
    /// Number of states; the row count of the transition table.
    pub const COUNT: usize = 5;

    /// Looks up the transition for a character of class `class`.
    ///
    /// # Example
    /// ```rust
    /// # use ebnf_calc::{CharClass, LexerState};
    /// assert_eq!(LexerState::Start.next(CharClass::Zero), LexerState::LeadingZero);
    /// assert_eq!(LexerState::LeadingZero.next(CharClass::NonZeroDigit), LexerState::Error);
    /// ```
    #[inline]
    pub fn next(self, class: CharClass) -> LexerState {
        TRANSITIONS[usize::from(self)][usize::from(class)]
    }

    /// Whether the lexeme accumulated in this state forms a complete token.
    #[inline]
    pub const fn is_accepting(self) -> bool {
        matches!(self, Self::InNumber | Self::LeadingZero | Self::Operator)
    }
}

impl From<LexerState> for usize {
    fn from(state: LexerState) -> usize {
        state as usize
    }
}

/// Counters collected over one lexer run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexerStats {
    pub chars: usize,
    pub tokens: usize,
    pub errors: usize,
}

/// The output of one lexer run.
///
/// `tokens` always ends with exactly one end-of-input token, even when
/// `errors` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexicalError>,
    pub stats: LexerStats,
}

impl Lexed {
    /// `true` when the line produced no lexical error.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The token sequence, or every lexical error if there was any.
    pub fn into_result(self) -> Result<Vec<Token>, Vec<LexicalError>> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}

/// The character-at-a-time tokenizer.
///
/// Feed characters with [`Lexer::push`] and close the line with
/// [`Lexer::finish`], or use [`Lexer::tokenize`] for a whole line.
///
/// # Example
/// ```rust
/// # use ebnf_calc::{Lexer, TokenKind};
/// let lexed = Lexer::tokenize("12 * 03");
/// let texts: Vec<&str> = lexed.tokens.iter().map(|t| t.text()).collect();
/// assert_eq!(texts, ["12", "*", "0", "3", "eof"]);
/// assert!(lexed.is_ok());
/// ```
#[derive(Debug, Default)]
pub struct Lexer {
    state: LexerState,
    lexeme: String,
    /// Column of the first character of `lexeme`.
    lexeme_start: usize,
    tokens: Vec<Token>,
    errors: Vec<LexicalError>,
    stats: LexerStats,
}

impl Lexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes a complete line.
    ///
    /// This is a pure function of `line`: the same line always yields the
    /// same tokens and errors.
    pub fn tokenize(line: &str) -> Lexed {
        let mut lexer = Self::new();
        let mut len = 0;
        for (column, ch) in line.chars().enumerate() {
            lexer.push(column, ch);
            len = column + 1;
        }
        lexer.finish(len)
    }

    /// Feeds the character `ch` found at 0-based column `column`.
    pub fn push(&mut self, column: usize, ch: char) {
        self.stats.chars += 1;
        let class = CharClass::of(ch);
        let next = self.state.next(class);
        log::trace!(
            "TRANSITION: {:?} --{:?} {:?}--> {:?}",
            self.state,
            class,
            ch,
            next
        );
        if next != LexerState::Error {
            self.extend(column, ch, next);
            return;
        }

        // `ch` cannot extend the lexeme: complete it, then retry from Start.
        self.flush(column);
        match LexerState::Start.next(class) {
            LexerState::Error => self.reject(column, ch),
            next => self.extend(column, ch, next),
        }
    }

    /// Flushes the last lexeme and appends the end-of-input token. `len` is
    /// the number of characters in the line.
    pub fn finish(mut self, len: usize) -> Lexed {
        self.flush(len);
        self.tokens.push(Token::end(len));
        log::debug!("Stats: {:?}", self.stats);
        Lexed {
            tokens: self.tokens,
            errors: self.errors,
            stats: self.stats,
        }
    }

    fn extend(&mut self, column: usize, ch: char, next: LexerState) {
        if self.lexeme.is_empty() {
            self.lexeme_start = column;
        }
        self.lexeme.push(ch);
        self.state = next;
    }

    /// Completes the pending lexeme. `end` is the column just past it, which
    /// is also the 1-based position of its last character.
    fn flush(&mut self, end: usize) {
        let text = mem::take(&mut self.lexeme);
        let state = mem::replace(&mut self.state, LexerState::Start);
        let span = Span::new(self.lexeme_start, end);
        if state.is_accepting() {
            let token = match state {
                LexerState::Operator => {
                    // only an operator character enters this state
                    let Some(op) = text.chars().next().and_then(Operator::from_char) else {
                        unreachable!()
                    };
                    Token::operator(op, span.start)
                }
                _ => Token::number(&text, span),
            };
            self.yield_token(token);
        } else if !alphabet::is_blank(&text) {
            self.error(&text, end);
        }
    }

    /// Handles a character that cannot start a lexeme either.
    fn reject(&mut self, column: usize, ch: char) {
        if CharClass::of(ch) != CharClass::Whitespace {
            let mut text = String::new();
            text.push(ch);
            self.error(&text, column + 1);
        }
    }

    fn yield_token(&mut self, token: Token) {
        log::debug!("TOKEN: {:?} {:?} at {}", token.kind(), token.text(), token.span().display());
        self.stats.tokens += 1;
        self.tokens.push(token);
    }

    fn error(&mut self, text: &str, position: usize) {
        log::debug!("LEXICAL ERROR: {:?} at position {}", text, position);
        self.stats.errors += 1;
        self.errors.push(LexicalError::new(text, position));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{END_TEXT, TokenKind};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn texts(lexed: &Lexed) -> Vec<&str> {
        lexed.tokens.iter().map(|t| t.text()).collect()
    }

    #[test]
    fn transition_table_matches_automaton() {
        use CharClass as C;
        assert_eq!(LexerState::Start.next(C::NonZeroDigit), LexerState::InNumber);
        assert_eq!(LexerState::Start.next(C::Zero), LexerState::LeadingZero);
        assert_eq!(LexerState::Start.next(C::Operator), LexerState::Operator);
        assert_eq!(LexerState::Start.next(C::Whitespace), LexerState::Error);
        assert_eq!(LexerState::Start.next(C::Illegal), LexerState::Error);
        assert_eq!(LexerState::InNumber.next(C::NonZeroDigit), LexerState::InNumber);
        assert_eq!(LexerState::InNumber.next(C::Zero), LexerState::InNumber);
        assert_eq!(LexerState::InNumber.next(C::Operator), LexerState::Error);
        for class in [C::NonZeroDigit, C::Zero, C::Operator, C::Whitespace, C::Illegal] {
            assert_eq!(LexerState::LeadingZero.next(class), LexerState::Error);
            assert_eq!(LexerState::Operator.next(class), LexerState::Error);
            assert_eq!(LexerState::Error.next(class), LexerState::Error);
        }
    }

    #[test]
    fn accepting_states() {
        assert!(!LexerState::Start.is_accepting());
        assert!(LexerState::InNumber.is_accepting());
        assert!(LexerState::LeadingZero.is_accepting());
        assert!(LexerState::Operator.is_accepting());
        assert!(!LexerState::Error.is_accepting());
    }

    #[test]
    fn simple_expression() {
        init_logger();
        let lexed = Lexer::tokenize("5 + 3");
        assert!(lexed.is_ok());
        assert_eq!(texts(&lexed), ["5", "+", "3", END_TEXT]);
        let kinds: Vec<TokenKind> = lexed.tokens.iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Number,
                TokenKind::Operator(Operator::Plus),
                TokenKind::Number,
                TokenKind::EndOfInput
            ]
        );
        assert_eq!(lexed.tokens[2].span(), Span::new(4, 5));
        assert_eq!(lexed.tokens[3].span(), Span::new(5, 5));
    }

    #[test]
    fn multi_digit_numbers_without_spaces() {
        init_logger();
        let lexed = Lexer::tokenize("120*3-40/5");
        assert_eq!(texts(&lexed), ["120", "*", "3", "-", "40", "/", "5", END_TEXT]);
        assert_eq!(lexed.tokens[0].span(), Span::new(0, 3));
        assert_eq!(lexed.stats.chars, 10);
        assert_eq!(lexed.stats.tokens, 7);
        assert_eq!(lexed.stats.errors, 0);
    }

    #[test]
    fn single_zero_is_a_number() {
        let lexed = Lexer::tokenize("0");
        assert_eq!(texts(&lexed), ["0", END_TEXT]);
        assert_eq!(lexed.tokens[0].kind(), TokenKind::Number);
    }

    #[test]
    fn leading_zero_never_extends() {
        assert_eq!(texts(&Lexer::tokenize("00")), ["0", "0", END_TEXT]);
        assert_eq!(texts(&Lexer::tokenize("03")), ["0", "3", END_TEXT]);
        assert_eq!(texts(&Lexer::tokenize("007")), ["0", "0", "7", END_TEXT]);
        // zeros inside a number are fine
        assert_eq!(texts(&Lexer::tokenize("1005")), ["1005", END_TEXT]);
    }

    #[test]
    fn operators_are_single_characters() {
        let lexed = Lexer::tokenize("5 ++ 3");
        assert_eq!(texts(&lexed), ["5", "+", "+", "3", END_TEXT]);
        assert_eq!(lexed.tokens[2].span(), Span::new(3, 4));
    }

    #[test]
    fn whitespace_is_dropped() {
        let lexed = Lexer::tokenize(" \t 7 \t* 2  ");
        assert!(lexed.is_ok());
        assert_eq!(texts(&lexed), ["7", "*", "2", END_TEXT]);
        assert_eq!(lexed.tokens.last().unwrap().span(), Span::new(11, 11));
    }

    #[test]
    fn empty_and_blank_lines() {
        let lexed = Lexer::tokenize("");
        assert!(lexed.is_ok());
        assert_eq!(texts(&lexed), [END_TEXT]);

        let lexed = Lexer::tokenize("   ");
        assert!(lexed.is_ok());
        assert_eq!(texts(&lexed), [END_TEXT]);
    }

    #[test]
    fn illegal_character_is_reported_at_its_position() {
        init_logger();
        let lexed = Lexer::tokenize("5 & 3");
        assert!(!lexed.is_ok());
        assert_eq!(lexed.errors, vec![LexicalError::new("&", 3)]);
        // scanning went on past the error
        assert_eq!(texts(&lexed), ["5", "3", END_TEXT]);
    }

    #[test]
    fn every_illegal_character_is_reported() {
        let lexed = Lexer::tokenize("1&&2 x");
        assert_eq!(
            lexed.errors,
            vec![
                LexicalError::new("&", 2),
                LexicalError::new("&", 3),
                LexicalError::new("x", 6),
            ]
        );
        assert_eq!(lexed.stats.errors, 3);
        assert_eq!(lexed.into_result().unwrap_err().len(), 3);
    }

    #[test]
    fn illegal_character_ends_a_number() {
        let lexed = Lexer::tokenize("12a");
        assert_eq!(texts(&lexed), ["12", END_TEXT]);
        assert_eq!(lexed.errors, vec![LexicalError::new("a", 3)]);
    }

    #[test]
    fn positions_count_characters_not_bytes() {
        let lexed = Lexer::tokenize("é+1");
        assert_eq!(lexed.errors, vec![LexicalError::new("é", 1)]);
        assert_eq!(lexed.tokens[0].span(), Span::new(1, 2));
    }

    #[test]
    fn carriage_return_is_illegal() {
        let lexed = Lexer::tokenize("1+2\r");
        assert_eq!(lexed.errors, vec![LexicalError::new("\r", 4)]);
    }

    #[test]
    fn incremental_feed_matches_tokenize() {
        let line = "40 - 2*0";
        let mut lexer = Lexer::new();
        for (column, ch) in line.chars().enumerate() {
            lexer.push(column, ch);
        }
        let lexed = lexer.finish(line.chars().count());
        assert_eq!(lexed.stats.chars, 8);
        assert_eq!(lexed, Lexer::tokenize(line));
    }

    #[test]
    fn tokenizing_is_repeatable() {
        for line in ["5 + 3", "0 0", "9 $ 1", "", "10*2/5"] {
            assert_eq!(Lexer::tokenize(line), Lexer::tokenize(line), "{line:?}");
        }
    }
}
