//! Byte cursor over a buffer that may change between reads.
//!
//! The cursor never holds a borrow of the text. Each read takes the current
//! buffer so that edits made by keyword rewrites at or after the cursor are
//! seen by the next read.

use crate::lexer::span::ByteOffset;

/// Byte-position cursor over input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    offset: ByteOffset,
}

/// Saved cursor position for speculative scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Checkpoint(ByteOffset);

impl Cursor {
    /// Creates a cursor at byte offset `0`.
    pub(crate) fn new() -> Self {
        Self {
            offset: ByteOffset::new(0),
        }
    }

    /// Returns the current byte offset.
    pub(crate) fn offset(&self) -> ByteOffset {
        self.offset
    }

    /// Returns the current byte at cursor position.
    pub(crate) fn peek_byte(&self, input: &str) -> Option<u8> {
        input.as_bytes().get(self.offset.as_usize()).copied()
    }

    /// Returns input from the cursor onward, or `""` past the end.
    pub(crate) fn remaining<'a>(&self, input: &'a str) -> &'a str {
        input.get(self.offset.as_usize()..).unwrap_or("")
    }

    /// Advances the cursor by `count` bytes, clamped to input length.
    pub(crate) fn advance_by(&mut self, count: usize, input: &str) {
        let next = self
            .offset
            .as_usize()
            .saturating_add(count)
            .min(input.len());
        self.offset = ByteOffset::from_usize(next);
    }

    /// Captures the current position.
    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.offset)
    }

    /// Restores a captured position.
    pub(crate) fn rollback(&mut self, checkpoint: Checkpoint) {
        self.offset = checkpoint.0;
    }
}
