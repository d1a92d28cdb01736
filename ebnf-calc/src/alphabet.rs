//! # Alphabet
//!
//! Static classification of input characters into the classes the lexer's
//! transition table is indexed by. The lexer never looks at a raw character
//! when choosing a transition; it only sees its [`CharClass`].

/// The class of a single input character.
///
/// Digits are split into [`CharClass::Zero`] and [`CharClass::NonZeroDigit`]
/// because a leading `0` is lexed as a complete number on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `1` through `9`.
    NonZeroDigit,
    /// `0`.
    Zero,
    /// One of `+ - * /`.
    Operator,
    /// Space or horizontal tab. Tolerated between lexemes, never tokenized.
    Whitespace,
    /// Anything else.
    Illegal,
}

impl CharClass {
    /// Number of character classes; the column count of the transition table.
    pub const COUNT: usize = 5;

    /// Classifies `ch`.
    ///
    /// # Example
    /// ```rust
    /// # use ebnf_calc::CharClass;
    /// assert_eq!(CharClass::of('7'), CharClass::NonZeroDigit);
    /// assert_eq!(CharClass::of('0'), CharClass::Zero);
    /// assert_eq!(CharClass::of('/'), CharClass::Operator);
    /// assert_eq!(CharClass::of('\t'), CharClass::Whitespace);
    /// assert_eq!(CharClass::of('&'), CharClass::Illegal);
    /// ```
    #[inline]
    pub const fn of(ch: char) -> Self {
        match ch {
            '1'..='9' => Self::NonZeroDigit,
            '0' => Self::Zero,
            '+' | '-' | '*' | '/' => Self::Operator,
            ' ' | '\t' => Self::Whitespace,
            _ => Self::Illegal,
        }
    }
}

impl From<CharClass> for usize {
    fn from(class: CharClass) -> usize {
        class as usize
    }
}

/// Returns `true` if `text` consists only of tolerated whitespace.
///
/// The empty string counts as blank: neither an empty lexeme nor a run of
/// whitespace is ever reported as a lexical error.
pub fn is_blank(text: &str) -> bool {
    text.chars()
        .all(|ch| CharClass::of(ch) == CharClass::Whitespace)
}
