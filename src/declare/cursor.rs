//! Write cursor over the host's live buffer.
//!
//! The cursor starts where the host parser will resume reading. Text injected
//! through [`DeclarationCursor::inject`] is inserted and stepped over in one
//! call, so later injections land after it and the host reads all of it, in
//! order, as if it had been typed at that spot.

use log::trace;

use crate::declare::finalizer::ScopeEndFinalizer;
use crate::declare::host::DeclarationSite;

/// Offset into a [`DeclarationSite`] buffer that follows its own edits.
pub struct DeclarationCursor<'s, S: DeclarationSite + ?Sized> {
    site: &'s mut S,
    offset: usize,
}

impl<'s, S: DeclarationSite + ?Sized> DeclarationCursor<'s, S> {
    /// Creates a cursor at the site's resume offset.
    pub fn new(site: &'s mut S) -> Self {
        let offset = site.offset();
        Self { site, offset }
    }

    /// Returns the current byte offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the keyword spelling that fired at this site.
    pub fn keyword(&self) -> &str {
        self.site.keyword()
    }

    /// Returns the innermost namespace in effect at the site.
    pub fn innermost_namespace(&self) -> &str {
        self.site.innermost_namespace()
    }

    /// Returns buffer content from the cursor onward.
    pub fn peek_remaining(&self) -> &str {
        self.site.buffer().get(self.offset..).unwrap_or("")
    }

    /// Returns buffer content after any whitespace or comments at the
    /// cursor, without moving.
    pub fn peek_significant(&self) -> &str {
        let skip = self.site.insignificant_len(self.offset);
        self.site.buffer().get(self.offset + skip..).unwrap_or("")
    }

    /// Moves past whitespace and comments.
    pub fn skip_insignificant(&mut self) {
        let skip = self.site.insignificant_len(self.offset);
        self.advance(skip);
    }

    /// Inserts `text` at `relative_offset` past the cursor and moves the
    /// cursor to just after it.
    pub fn inject(&mut self, relative_offset: usize, text: &str) {
        let advance = self.splice(relative_offset, text);
        self.advance(advance);
    }

    /// Removes `len` bytes at the cursor and returns them. The cursor stays.
    pub fn strip(&mut self, len: usize) -> String {
        let buffer = self.site.buffer_mut();
        let end = self.offset.saturating_add(len).min(buffer.len());
        let start = self.offset.min(end);
        buffer.drain(start..end).collect()
    }

    /// Arms `finalizer` for the block opening at the cursor.
    pub fn anchor_finalizer(&mut self, finalizer: ScopeEndFinalizer) {
        self.site.register_block_finalizer(self.offset, finalizer);
    }

    fn splice(&mut self, relative_offset: usize, text: &str) -> usize {
        let buffer = self.site.buffer_mut();
        let at = self.offset.saturating_add(relative_offset).min(buffer.len());
        buffer.insert_str(at, text);
        trace!("injected {text:?} at byte {at}");
        at.saturating_sub(self.offset) + text.len()
    }

    fn advance(&mut self, count: usize) {
        self.offset = self
            .offset
            .saturating_add(count)
            .min(self.site.buffer().len());
    }
}
