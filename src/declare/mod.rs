//! Keyword-triggered rewriting of namespaced block declarations.
//!
//! An installed keyword fires while the host parser is reading the buffer.
//! It rewrites
//!
//! ```text
//! module Foo::Bar 1.23 { body }
//! ```
//!
//! in place into a call of the keyword's run-time trampoline whose second
//! argument is a `do` block that first enters namespace `Foo::Bar`, sets its
//! version, and makes the keyword available again for nested declarations.
//! The name and version are both optional; without a name the block is
//! declared under the innermost enclosing namespace.

pub mod batch;
pub mod cursor;
pub mod driver;
pub mod error;
pub mod finalizer;
pub mod host;
pub mod install;
pub mod options;
pub mod preamble;
pub mod registry;
pub mod strip;
pub mod trampoline;
pub mod version;

pub use batch::{install_multiple, merge_options};
pub use cursor::DeclarationCursor;
pub use driver::{rewrite, Declaration, DeclarationContext};
pub use error::{ConfigurationError, DeclareSyntaxError, Stage};
pub use finalizer::ScopeEndFinalizer;
pub use host::{DeclarationSite, InstallTarget};
pub use install::{install, Declarator, Keyword, Module, DEFAULT_KEYWORD};
pub use options::{normalize, resolve_inner, InnerKeyword, OptionRecord};
pub use registry::DeclaratorRegistry;
pub use trampoline::{default_trampoline, Trampoline};
pub use version::recognize_version;
