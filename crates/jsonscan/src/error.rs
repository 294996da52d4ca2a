//! Errors surfaced by the `Result`-returning scan entry points.
//!
//! [`Lexer::advance`](crate::Lexer::advance) itself never fails: an
//! unrecognized character is the ordinary [`NextToken::InvalidToken`]
//! result. [`tokenize`](crate::tokenize) and the [`Tokens`](crate::Tokens)
//! iterator turn that result into a [`LexError`].
//!
//! [`NextToken::InvalidToken`]: crate::NextToken::InvalidToken

use thiserror::Error;

/// Scan failure.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// No rule matches at `offset` (whitespace already skipped).
    ///
    /// Covers unknown characters and malformed lexemes alike, e.g. a `-`
    /// sign or an unterminated string's opening quote.
    #[error("no token rule matches at byte offset {offset}")]
    InvalidToken { offset: usize },
}

impl LexError {
    /// Byte offset of the unrecognized input.
    pub const fn offset(&self) -> usize {
        match self {
            LexError::InvalidToken { offset } => *offset,
        }
    }
}
