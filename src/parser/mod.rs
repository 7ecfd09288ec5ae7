//! Host-language parser.
//!
//! Parses a live buffer that installed keywords rewrite as they are seen,
//! producing a [`Program`] whose calls are bound at parse time.

pub mod ast;
pub mod error;
pub mod parser;

mod scope;

pub use ast::{Block, Expr, Program, Stmt};
pub use error::{ParseError, ParseErrorKind};
pub use parser::{
    is_reserved, Compiled, ParseOptions, Parser, CURRENT_NAMESPACE, DEFAULT_NAMESPACE,
};
