//! Diagnostic and error contracts for the lexer.

use thiserror::Error;

use crate::lexer::span::Span;

/// Stable diagnostic codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// A string literal reached end of input.
    UnterminatedString,
    /// A byte that starts no token.
    UnexpectedCharacter,
}

/// User-facing diagnostic payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexDiagnostic {
    /// Machine-readable diagnostic code.
    pub code: DiagnosticCode,
    /// Human-readable message text.
    pub message: String,
    /// Source span associated with this diagnostic.
    pub span: Span,
}

impl LexDiagnostic {
    /// Creates a diagnostic value.
    pub fn new(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
        }
    }
}

/// Fatal lexical error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FatalLexError {
    /// A `"` literal was never closed.
    #[error("{}", .0.message)]
    UnterminatedString(LexDiagnostic),
    /// Input contained a character outside the token grammar.
    #[error("{}", .0.message)]
    UnexpectedCharacter(LexDiagnostic),
}

impl FatalLexError {
    /// Returns the diagnostic carried by this error.
    pub fn diagnostic(&self) -> &LexDiagnostic {
        match self {
            Self::UnterminatedString(diagnostic) | Self::UnexpectedCharacter(diagnostic) => {
                diagnostic
            }
        }
    }
}
