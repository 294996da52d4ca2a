//! Borrowed read cursor over the scanner input.
//!
//! The cursor never copies the source: it pairs the `&str` with a byte
//! position. It only moves forward, and only by whole characters, so the
//! position is always a `char` boundary of the source.

use crate::whitespace;

/// Forward-only cursor over a borrowed `&str`.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for lookahead.
///
/// # Invariant
///
/// `pos <= source.len()` and `source.is_char_boundary(pos)`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub(crate) fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// The full source buffer.
    #[inline]
    pub(crate) fn source(&self) -> &'a str {
        self.source
    }

    /// Current byte offset in the source.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Returns `true` once the cursor has reached the end of the source.
    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The unread remainder of the source.
    #[inline]
    pub(crate) fn rest(&self) -> &'a str {
        self.source.get(self.pos..).unwrap_or("")
    }

    /// Advance the cursor by `n` bytes, stopping at the end of the source.
    ///
    /// The scanner only passes lengths of tokens matched at the current
    /// position, which always end on a `char` boundary.
    #[inline]
    pub(crate) fn advance_n(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.source.len());
    }

    /// Advance past a run of whitespace, stopping at the first
    /// non-whitespace character or at EOF.
    #[inline]
    pub(crate) fn eat_whitespace(&mut self) {
        self.pos += whitespace::leading_len(self.rest());
    }
}
