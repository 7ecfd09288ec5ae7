//! Opening rewrite of one declaration site.
//!
//! For `module Foo::Bar 1.23 { body }` the buffer becomes
//!
//! ```text
//! module ("Foo::Bar", do  { package Foo::Bar; version "1.23"; declare ...; (); body }
//! ```
//!
//! and the finalizer armed on the `{` later appends `);` after the block.
//! Every intermediate state is text the host can keep reading.

use log::debug;

use crate::declare::cursor::DeclarationCursor;
use crate::declare::error::{DeclareSyntaxError, Stage};
use crate::declare::finalizer::ScopeEndFinalizer;
use crate::declare::host::DeclarationSite;
use crate::declare::install::Declarator;
use crate::declare::options::OptionRecord;
use crate::declare::preamble;
use crate::declare::strip::{strip_name, strip_version};
use crate::lexer::quote_string;

/// Opens the argument list of the rewritten call.
pub const CALL_OPEN: &str = "(";

/// Delimiter that must follow the declaration.
pub const BLOCK_OPEN: &str = "{";

/// Outcome of a successful opening rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Name the block is declared under.
    pub name: String,
    /// Version literal, when one was given.
    pub version: Option<String>,
    /// Last token class recognized.
    pub stage: Stage,
}

/// Per-site state, dropped when the opening rewrite ends.
pub struct DeclarationContext<'s, S: DeclarationSite + ?Sized> {
    resolved_name: Option<String>,
    resolved_version: Option<String>,
    stage: Stage,
    cursor: DeclarationCursor<'s, S>,
}

impl<'s, S: DeclarationSite + ?Sized> DeclarationContext<'s, S> {
    /// Starts a context just past the keyword at `site`.
    pub fn new(site: &'s mut S) -> Self {
        Self {
            resolved_name: None,
            resolved_version: None,
            stage: Stage::Keyword,
            cursor: DeclarationCursor::new(site),
        }
    }

    /// Last stage recognized so far.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    fn open_call(&mut self) {
        self.cursor.skip_insignificant();
        self.cursor.inject(0, CALL_OPEN);
    }

    fn take_name(&mut self) -> String {
        if let Some(name) = strip_name(&mut self.cursor) {
            self.stage = Stage::Namespace;
            self.resolved_name = Some(name);
        }
        let name = match &self.resolved_name {
            Some(name) => name.clone(),
            None => self.cursor.innermost_namespace().to_string(),
        };
        self.cursor
            .inject(0, &format!("{}, do", quote_string(&name)));
        name
    }

    fn take_version(&mut self) {
        if let Some(version) = strip_version(&mut self.cursor) {
            self.stage = Stage::Version;
            self.resolved_version = Some(version);
        }
    }

    fn require_block(&mut self) -> Result<(), DeclareSyntaxError> {
        self.cursor.skip_insignificant();
        if self.cursor.peek_remaining().starts_with(BLOCK_OPEN) {
            return Ok(());
        }

        let rest = self.cursor.peek_remaining();
        let line = rest.lines().next().unwrap_or("").trim_end();
        Err(DeclareSyntaxError {
            keyword: self.cursor.keyword().to_string(),
            stage: self.stage,
            found: if line.is_empty() {
                "end of input".to_string()
            } else {
                line.to_string()
            },
        })
    }

    fn open_block(&mut self, preamble: &str) {
        let finalizer = ScopeEndFinalizer::new(self.cursor.keyword());
        self.cursor.anchor_finalizer(finalizer);
        self.cursor.inject(BLOCK_OPEN.len(), preamble);
    }
}

/// Rewrites the declaration at `site` for a keyword of type `declarator`.
///
/// On error the buffer keeps the edits made so far; the host is expected to
/// abort the parse.
pub fn rewrite<S: DeclarationSite + ?Sized>(
    declarator: &dyn Declarator,
    options: &OptionRecord,
    site: &mut S,
) -> Result<Declaration, DeclareSyntaxError> {
    let mut context = DeclarationContext::new(site);
    context.open_call();
    let name = context.take_name();
    context.take_version();

    let statements =
        declarator.default_preamble(&name, context.resolved_version.as_deref(), options);
    let preamble = preamble::render(&statements);

    context.require_block()?;
    context.open_block(&preamble);

    debug!(
        "declared {name} {} with {}",
        context.resolved_version.as_deref().unwrap_or("(unversioned)"),
        context.cursor.keyword()
    );
    Ok(Declaration {
        name,
        version: context.resolved_version,
        stage: context.stage,
    })
}
