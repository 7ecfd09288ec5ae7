//! Interfaces the engine consumes from its host.
//!
//! The parser side hands a [`DeclarationSite`] to a keyword each time the
//! keyword is seen. The namespace side receives installed keywords and
//! trampolines through [`InstallTarget`].

use crate::declare::finalizer::ScopeEndFinalizer;
use crate::declare::install::Keyword;
use crate::declare::trampoline::Trampoline;

/// Live view of the parser at a keyword occurrence or block end.
pub trait DeclarationSite {
    /// Current buffer text.
    fn buffer(&self) -> &str;

    /// Mutable buffer. Edits must stay at or after [`Self::offset`].
    fn buffer_mut(&mut self) -> &mut String;

    /// Offset the parser will resume reading from.
    fn offset(&self) -> usize;

    /// Spelling of the keyword that fired.
    fn keyword(&self) -> &str;

    /// Length of whitespace and comments starting at `at`.
    fn insignificant_len(&self, at: usize) -> usize;

    /// Innermost namespace in effect at the site.
    fn innermost_namespace(&self) -> &str;

    /// Arms `finalizer` for the block whose `{` sits at byte `anchor`.
    fn register_block_finalizer(&mut self, anchor: usize, finalizer: ScopeEndFinalizer);
}

/// Identifier table a keyword installs into.
pub trait InstallTarget {
    /// Binds `alias` in `namespace` as a parse-time keyword.
    fn install_keyword(&mut self, namespace: &str, alias: &str, keyword: Keyword);

    /// Binds `alias` in `namespace` as the run-time function.
    fn install_trampoline(&mut self, namespace: &str, alias: &str, trampoline: Trampoline);
}
