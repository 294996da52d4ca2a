//! Pull-based scanner driving the rule table over an input buffer.
//!
//! Each [`Lexer::advance`] call skips whitespace, then tries every rule of
//! [`Rule::ALL`](crate::Rule::ALL) in order at the cursor. The first match
//! wins and the cursor moves past it.
//!
//! # States
//!
//! The cursor only ever sits somewhere in `0..=source.len()`.
//!
//! - Reaching the end yields [`NextToken::Eos`], and every later call
//!   yields the same `Eos`.
//! - An unmatched character yields [`NextToken::InvalidToken`] without
//!   moving the cursor, so every later call yields the same result. There is
//!   no resynchronization: callers abort the scan.

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::rule;
use crate::token::Token;

/// Outcome of one scan step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextToken {
    /// End of input. Carries the final cursor position.
    Eos(usize),
    /// No rule matches at this offset.
    InvalidToken(usize),
    /// A rule matched. The offset equals `token.offset`.
    ValidToken(usize, Token),
}

impl NextToken {
    /// Offset this result refers to.
    pub const fn offset(&self) -> usize {
        match self {
            NextToken::Eos(offset)
            | NextToken::InvalidToken(offset)
            | NextToken::ValidToken(offset, _) => *offset,
        }
    }

    /// The matched token, if any.
    pub const fn token(&self) -> Option<Token> {
        match self {
            NextToken::ValidToken(_, token) => Some(*token),
            NextToken::Eos(_) | NextToken::InvalidToken(_) => None,
        }
    }
}

/// Scanner over a borrowed input buffer.
///
/// One `Lexer` scans one input. It holds no resources besides the borrow,
/// and cloning it snapshots the scan position.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Create a scanner positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// The input buffer.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Current cursor position (byte offset).
    pub fn position(&self) -> usize {
        self.cursor.pos()
    }

    /// Returns `true` if the cursor sits at the end of the input.
    ///
    /// Trailing whitespace is only consumed by the next [`advance`](Self::advance),
    /// so this can be `false` right before a [`NextToken::Eos`].
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Scan the next token.
    pub fn advance(&mut self) -> NextToken {
        self.cursor.eat_whitespace();
        let offset = self.cursor.pos();

        if self.cursor.is_eof() {
            trace!(offset, "end of input");
            return NextToken::Eos(offset);
        }

        match rule::match_at(self.cursor.source(), offset) {
            Some(token) => {
                trace!(offset, len = token.len, kind = %token.kind, "token");
                self.cursor.advance_n(token.len);
                NextToken::ValidToken(offset, token)
            }
            None => {
                debug!(offset, "no rule matches");
                NextToken::InvalidToken(offset)
            }
        }
    }

    /// Iterate over the remaining tokens.
    pub fn tokens(self) -> Tokens<'a> {
        Tokens {
            lexer: self,
            done: false,
        }
    }
}

impl<'a> IntoIterator for Lexer<'a> {
    type Item = Result<Token, LexError>;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens()
    }
}

/// Iterator adapter over [`Lexer::advance`].
///
/// Yields `Ok` per valid token and ends at end of input. An invalid token
/// yields a single `Err`, after which the iterator is exhausted.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    lexer: Lexer<'a>,
    done: bool,
}

impl<'a> Tokens<'a> {
    /// The underlying scanner.
    pub fn lexer(&self) -> &Lexer<'a> {
        &self.lexer
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.lexer.advance() {
            NextToken::ValidToken(_, token) => Some(Ok(token)),
            NextToken::InvalidToken(offset) => {
                self.done = true;
                Some(Err(LexError::InvalidToken { offset }))
            }
            NextToken::Eos(_) => {
                self.done = true;
                None
            }
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Scan all of `source`, failing at the first unrecognized offset.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokens().collect()
}
