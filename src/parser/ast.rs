//! Syntax tree produced by the parser.
//!
//! Parse-time statements (`package`, `declare`) take effect while parsing
//! and leave no node behind.

use crate::lexer::Span;
use crate::runtime::{Function, Value};

/// Root parser output.
#[derive(Debug, Clone, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Stmt>,
}

/// `{ ... }` body of a `do` expression.
#[derive(Debug, Clone, Default)]
pub struct Block {
    /// Statements in source order.
    pub statements: Vec<Stmt>,
}

/// Run-time statement.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// Expression evaluated for its value.
    Expr(Expr),
    /// `version "1.23"`: sets the version tag of `namespace`.
    Version {
        /// Namespace current at the statement.
        namespace: String,
        /// Version literal text.
        literal: String,
    },
}

/// Expression node.
#[derive(Debug, Clone)]
pub enum Expr {
    /// Literal value, including `()` and barewords.
    Literal(Value),
    /// `do { ... }`
    Block(Block),
    /// Call of a function bound at parse time.
    Call {
        /// Bound function.
        function: Function,
        /// Argument expressions.
        args: Vec<Expr>,
        /// Span of the callee name.
        span: Span,
    },
}
