//! Error contracts for keyword installation and declaration rewriting.

use std::fmt;

use thiserror::Error;

/// How far the rewrite of one declaration got before it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Only the keyword itself was recognized.
    Keyword,
    /// A name token followed the keyword.
    Namespace,
    /// A version token followed.
    Version,
}

impl Stage {
    /// Returns the label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Namespace => "namespace",
            Self::Version => "version",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Invalid keyword configuration, raised before anything is installed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Options were neither absent, a mapping, nor a list.
    #[error("options for {declarator} must be a mapping or a list, not: {found}")]
    InvalidOptions { declarator: String, found: String },
    /// Textual options were not valid JSON.
    #[error("options for {declarator} are not valid JSON: {message}")]
    MalformedOptions { declarator: String, message: String },
    /// The `alias` option was not a string.
    #[error("alias for {declarator} must be a string, not: {found}")]
    AliasNotString { declarator: String, found: String },
    /// The `alias` option is not an identifier.
    #[error("{alias:?} is not a valid alias for {declarator}")]
    InvalidAlias { alias: String, declarator: String },
    /// The `inner` option was not a list.
    #[error("inner keywords for {declarator} must be a list, not: {found}")]
    InnerNotList { declarator: String, found: String },
    /// An `inner` entry was neither a type name nor that name's options.
    #[error("invalid inner keyword entry for {declarator}: {found}")]
    InvalidInnerEntry { declarator: String, found: String },
    /// The `preamble` option was not a list.
    #[error("preamble for {declarator} must be a list, not: {found}")]
    PreambleNotList { declarator: String, found: String },
    /// A `preamble` entry was not a string.
    #[error("preamble statements for {declarator} must be strings, not: {found}")]
    PreambleEntryNotString { declarator: String, found: String },
    /// An option key no validator knows.
    #[error("unknown option {key:?} for {declarator}")]
    UnknownOption { key: String, declarator: String },
    /// A declarator type name absent from the registry.
    #[error("unknown declarator {0}")]
    UnknownDeclarator(String),
    /// Batch blocks were not a mapping from alias to options.
    #[error("blocks for {declarator} must be a mapping from alias to options, not: {found}")]
    InvalidBlocks { declarator: String, found: String },
}

/// A declaration that is not followed by a block.
///
/// The buffer has already been partially rewritten when this is raised, so
/// the enclosing parse must abort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected a block after {keyword} {stage}, not: {found}")]
pub struct DeclareSyntaxError {
    /// Keyword spelling that triggered the rewrite.
    pub keyword: String,
    /// Last stage recognized before the failure.
    pub stage: Stage,
    /// Rest of the offending line.
    pub found: String,
}
