//! Source location primitives.
//!
//! Offsets index the live source buffer. Keyword rewrites may grow or shrink
//! the buffer after a span was recorded, so spans describe where a token sat
//! at the moment it was lexed.

/// Byte offset within the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteOffset(u32);

impl ByteOffset {
    /// Creates a byte offset value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Creates an offset from `usize` with saturation.
    pub fn from_usize(value: usize) -> Self {
        match u32::try_from(value) {
            Ok(offset) => Self(offset),
            Err(_) => Self(u32::MAX),
        }
    }

    /// Returns the raw offset value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Converts the offset to `usize`.
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Half-open byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: ByteOffset,
    /// Exclusive end byte offset.
    pub end: ByteOffset,
}

impl Span {
    /// Creates a span and normalizes offset ordering.
    pub fn new(start: ByteOffset, end: ByteOffset) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Returns the span length in bytes.
    pub fn len(self) -> u32 {
        self.end.value() - self.start.value()
    }

    /// Returns `true` when the span contains no bytes.
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}
