//! Rule-driven lexical scanner for JSON-style documents.
//!
//! The scanner turns an in-memory `&str` into a stream of [`Token`]s: byte
//! offset, byte length and [`TokenType`]. It does not build trees, check
//! bracket balance, convert numbers or decode escapes. Those belong to the
//! parser consuming the token stream.
//!
//! # Usage
//!
//! ```
//! use jsonscan::{Lexer, NextToken, TokenType};
//!
//! let source = "[1, true]";
//! let mut lexer = Lexer::new(source);
//! let mut kinds = Vec::new();
//! loop {
//!     match lexer.advance() {
//!         NextToken::ValidToken(_, token) => kinds.push(token.kind),
//!         NextToken::InvalidToken(offset) => panic!("bad input at {offset}"),
//!         NextToken::Eos(_) => break,
//!     }
//! }
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenType::OpenArray,
//!         TokenType::NumberLiteral,
//!         TokenType::Comma,
//!         TokenType::BooleanLiteral,
//!         TokenType::CloseArray,
//!     ]
//! );
//! ```
//!
//! # Crate Structure
//!
//! - [`token`]: token descriptors
//! - [`rule`]: the ordered matching rules
//! - [`lexer`]: the scanner, its step results and iterator adapter
//! - [`whitespace`]: the set of characters skipped between tokens

mod cursor;
mod error;
pub mod lexer;
pub mod rule;
pub mod token;
pub mod whitespace;

pub use error::LexError;
pub use lexer::{tokenize, Lexer, NextToken, Tokens};
pub use rule::{match_at, Rule};
pub use token::{Token, TokenType};
