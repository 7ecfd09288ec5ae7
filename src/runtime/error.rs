//! Runtime error contracts.

use std::fmt;

use thiserror::Error;

/// Stable runtime error categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// A function received the wrong number of arguments.
    Arity,
    /// Operand type does not match what the operation expects.
    TypeMismatch,
    /// Evaluation nested deeper than the configured limit.
    DepthExceeded,
    /// Failure raised by a native function.
    Native(String),
}

impl fmt::Display for RuntimeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arity => write!(f, "arity"),
            Self::TypeMismatch => write!(f, "type mismatch"),
            Self::DepthExceeded => write!(f, "depth exceeded"),
            Self::Native(function) => write!(f, "native error in {function}"),
        }
    }
}

/// Runtime error payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RuntimeError {
    /// Error category.
    pub kind: RuntimeErrorKind,
    /// Human-readable error message.
    pub message: String,
}

impl RuntimeError {
    /// Creates a runtime error.
    pub fn new(kind: RuntimeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates an `Arity` error.
    pub fn arity(function: &str, expected: usize, found: usize) -> Self {
        Self::new(
            RuntimeErrorKind::Arity,
            format!("{function} expects {expected} arguments, got {found}"),
        )
    }

    /// Creates a `TypeMismatch` error.
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::new(RuntimeErrorKind::TypeMismatch, message)
    }

    /// Creates a `DepthExceeded` error.
    pub fn depth_exceeded(limit: usize) -> Self {
        Self::new(
            RuntimeErrorKind::DepthExceeded,
            format!("evaluation depth exceeds {limit}"),
        )
    }

    /// Creates a `Native` error attributed to `function`.
    pub fn native(function: &str, message: impl Into<String>) -> Self {
        Self::new(RuntimeErrorKind::Native(function.to_string()), message)
    }
}
