//! Matching rules, one per lexeme class.
//!
//! A rule inspects the input starting exactly at a given offset and either
//! recognizes a lexeme there or reports no match. Rules are stateless and
//! never look at anything before `offset`.
//!
//! # Grammar
//!
//! The recognized grammar is deliberately smaller than JSON:
//!
//! - numbers are unsigned digit runs (`-3` and `3.14` are not numbers; the
//!   latter scans as `3` followed by an unmatched `.`),
//! - strings end at the first `"` after the opening quote, with no escape
//!   handling (`"a\"` is a complete string),
//! - keywords are prefix matches with no word-boundary check (`truex` starts
//!   with the boolean `true`).
//!
//! Every lexeme starts with an ASCII byte, so rules work on bytes and
//! tolerate any offset, including ones past the end or inside a multibyte
//! character: those simply do not match.

use crate::token::{Token, TokenType};

/// A single matching rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    Number,
    Boolean,
    Null,
    String,
    OpenArray,
    CloseArray,
    OpenObject,
    CloseObject,
    Comma,
    SemiColon,
}

impl Rule {
    /// All rules in priority order. The scanner tries them front to back.
    pub const ALL: [Rule; 10] = [
        Rule::Number,
        Rule::Boolean,
        Rule::Null,
        Rule::String,
        Rule::OpenArray,
        Rule::CloseArray,
        Rule::OpenObject,
        Rule::CloseObject,
        Rule::Comma,
        Rule::SemiColon,
    ];

    /// The token kind this rule produces.
    pub const fn kind(self) -> TokenType {
        match self {
            Rule::Number => TokenType::NumberLiteral,
            Rule::Boolean => TokenType::BooleanLiteral,
            Rule::Null => TokenType::NullLiteral,
            Rule::String => TokenType::StringLiteral,
            Rule::OpenArray => TokenType::OpenArray,
            Rule::CloseArray => TokenType::CloseArray,
            Rule::OpenObject => TokenType::OpenObject,
            Rule::CloseObject => TokenType::CloseObject,
            Rule::Comma => TokenType::Comma,
            Rule::SemiColon => TokenType::SemiColon,
        }
    }

    /// Try to recognize a lexeme starting exactly at `offset`.
    pub fn try_match(self, input: &str, offset: usize) -> Option<Token> {
        let rest = input.as_bytes().get(offset..)?;
        let len = match self {
            Rule::Number => number(rest),
            Rule::Boolean => keyword(rest, b"true").or_else(|| keyword(rest, b"false")),
            Rule::Null => keyword(rest, b"null"),
            Rule::String => string(rest),
            Rule::OpenArray => symbol(rest, b'['),
            Rule::CloseArray => symbol(rest, b']'),
            Rule::OpenObject => symbol(rest, b'{'),
            Rule::CloseObject => symbol(rest, b'}'),
            Rule::Comma => symbol(rest, b','),
            Rule::SemiColon => symbol(rest, b':'),
        }?;
        Some(Token::new(offset, len, self.kind()))
    }
}

/// Apply [`Rule::ALL`] at `offset`, returning the first match.
pub fn match_at(input: &str, offset: usize) -> Option<Token> {
    Rule::ALL
        .iter()
        .find_map(|rule| rule.try_match(input, offset))
}

/// Maximal run of ASCII digits; at least one.
fn number(rest: &[u8]) -> Option<usize> {
    let len = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    (len > 0).then_some(len)
}

/// Exact literal prefix.
fn keyword(rest: &[u8], word: &[u8]) -> Option<usize> {
    rest.starts_with(word).then_some(word.len())
}

/// Opening quote through the nearest following quote, both inclusive.
///
/// Unterminated strings do not match at all.
fn string(rest: &[u8]) -> Option<usize> {
    let body = rest.strip_prefix(b"\"")?;
    let close = memchr::memchr(b'"', body)?;
    Some(close + 2)
}

fn symbol(rest: &[u8], sym: u8) -> Option<usize> {
    (rest.first() == Some(&sym)).then_some(1)
}

#[cfg(test)]
mod tests;
