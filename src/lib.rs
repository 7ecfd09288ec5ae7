//! Library entrypoint for `nsblock`.
//!
//! `nsblock` installs keywords that turn
//!
//! ```text
//! module Foo::Bar 1.23 { ... }
//! ```
//!
//! into a block run inside namespace `Foo::Bar`, tagged with version `1.23`,
//! whose value is the resolved name. The rewriting engine lives in
//! [`declare`]; the small host language it runs in is made of [`lexer`],
//! [`parser`] and [`runtime`], tied together by [`Interpreter`].

pub mod declare;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod runtime;

pub use error::Error;
pub use interpreter::Interpreter;
