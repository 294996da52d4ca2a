//! Token descriptors emitted by the scanner.
//!
//! A [`Token`] never owns text. It records where a lexeme sits in the input
//! buffer (`offset`, `len`) and what it was classified as ([`TokenType`]).
//! Consumers recover the lexeme itself with [`Token::text`].

use std::fmt;

/// Lexical category of a token.
///
/// The set is closed: the scanner recognizes four literal classes and six
/// structural symbols, nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Unsigned run of ASCII decimal digits.
    NumberLiteral,
    /// `true` or `false`.
    BooleanLiteral,
    /// `null`.
    NullLiteral,
    /// Double-quoted text, both quotes included.
    StringLiteral,
    /// `[`
    OpenArray,
    /// `]`
    CloseArray,
    /// `{`
    OpenObject,
    /// `}`
    CloseObject,
    /// `,`
    Comma,
    /// `:`, the key/value separator.
    SemiColon,
}

impl TokenType {
    /// Fixed source text for structural kinds.
    ///
    /// Returns `None` for literal kinds, whose text varies per token.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenType::OpenArray => Some("["),
            TokenType::CloseArray => Some("]"),
            TokenType::OpenObject => Some("{"),
            TokenType::CloseObject => Some("}"),
            TokenType::Comma => Some(","),
            TokenType::SemiColon => Some(":"),
            TokenType::NumberLiteral
            | TokenType::BooleanLiteral
            | TokenType::NullLiteral
            | TokenType::StringLiteral => None,
        }
    }

    /// Human-readable name for diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenType::NumberLiteral => "number",
            TokenType::BooleanLiteral => "boolean",
            TokenType::NullLiteral => "null",
            TokenType::StringLiteral => "string",
            TokenType::OpenArray => "'['",
            TokenType::CloseArray => "']'",
            TokenType::OpenObject => "'{'",
            TokenType::CloseObject => "'}'",
            TokenType::Comma => "','",
            TokenType::SemiColon => "':'",
        }
    }

    /// Returns `true` for the four literal kinds.
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenType::NumberLiteral
                | TokenType::BooleanLiteral
                | TokenType::NullLiteral
                | TokenType::StringLiteral
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Position, length and category of one lexeme.
///
/// `offset` and `len` are byte counts into the scanned `&str`. Tokens
/// produced by the scanner always satisfy `len >= 1` and
/// `offset + len <= source.len()`. Every lexeme is ASCII except a string
/// body, so only a string with non-ASCII content has a `len` larger than
/// its character count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Byte offset of the first byte of the lexeme.
    pub offset: usize,
    /// Byte length of the lexeme.
    pub len: usize,
    /// Lexical category.
    pub kind: TokenType,
}

/// Size assertion: two `usize` plus a one-byte tag.
const _: () = assert!(std::mem::size_of::<Token>() <= 3 * std::mem::size_of::<usize>());

impl Token {
    #[inline]
    pub const fn new(offset: usize, len: usize, kind: TokenType) -> Self {
        Self { offset, len, kind }
    }

    /// Byte offset one past the last byte of the lexeme.
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    /// The literal source text of this token.
    ///
    /// Returns `None` when the span does not fit `source` or does not fall
    /// on `char` boundaries, which only happens if `source` is not the
    /// buffer the token was scanned from.
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.offset..self.end())
    }
}
