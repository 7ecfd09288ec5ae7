//! One-shot rewrite run after a declared block's closing `}`.

use log::trace;

use crate::declare::cursor::DeclarationCursor;
use crate::declare::host::DeclarationSite;

/// Statement terminator the host accepts after a block.
pub const STATEMENT_TERMINATOR: &str = ";";

/// Closes the call opened at the keyword and ends the statement.
pub const CLOSING: &str = ");";

/// Deferred close of one declaration's rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeEndFinalizer {
    keyword: String,
    armed: bool,
}

impl ScopeEndFinalizer {
    /// Creates an armed finalizer for a declaration made with `keyword`.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            armed: true,
        }
    }

    /// Keyword of the declaration this finalizer closes.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Returns `true` until the finalizer has fired.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Rewrites the text right after the closing `}` at `site`.
    ///
    /// A `;` immediately following the block is dropped and [`CLOSING`] is
    /// inserted in its place. Returns `false` without touching the buffer
    /// when already fired.
    pub fn fire<S: DeclarationSite + ?Sized>(&mut self, site: &mut S) -> bool {
        if !self.armed {
            return false;
        }
        self.armed = false;

        let mut cursor = DeclarationCursor::new(site);
        if cursor.peek_remaining().starts_with(STATEMENT_TERMINATOR) {
            cursor.strip(STATEMENT_TERMINATOR.len());
        }
        cursor.inject(0, CLOSING);
        trace!("closed {} block at byte {}", self.keyword, cursor.offset());
        true
    }
}
