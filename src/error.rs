//! Crate-level error type.

use thiserror::Error;

use crate::declare::ConfigurationError;
use crate::parser::ParseError;
use crate::runtime::RuntimeError;

/// Any failure surfaced by [`crate::Interpreter`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Keyword options rejected before installation.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// Source text could not be parsed or rewritten.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
