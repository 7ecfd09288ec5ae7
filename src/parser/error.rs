//! Parser error contracts.

use std::fmt;

use crate::declare::{ConfigurationError, DeclareSyntaxError};
use crate::lexer::{FatalLexError, Span, Token};

/// Stable parser error categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A concrete token did not match grammar expectations.
    UnexpectedToken,
    /// Input ended before required grammar elements were found.
    UnexpectedEndOfInput,
    /// Blocks, parentheses or argument lists nested deeper than
    /// [`crate::parser::ParseOptions::max_nesting`].
    NestingLimitExceeded,
    /// A call names no function bound at parse time.
    UndefinedFunction,
    /// A keyword rewrite could not find its block.
    Declaration(DeclareSyntaxError),
    /// A `declare` statement carried invalid options.
    Configuration(ConfigurationError),
    /// Lexer-level fatal error.
    Lexer(FatalLexError),
}

/// Parser error payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Error category.
    pub kind: ParseErrorKind,
    /// Optional source span near the failure.
    pub span: Option<Span>,
    /// Expected token labels.
    pub expected: Vec<String>,
    /// Found token/terminal label.
    pub found: Option<String>,
}

impl ParseError {
    /// Creates a parser error.
    pub fn new(
        kind: ParseErrorKind,
        span: Option<Span>,
        expected: Vec<String>,
        found: Option<String>,
    ) -> Self {
        Self {
            kind,
            span,
            expected,
            found,
        }
    }

    /// Creates an `UnexpectedToken` error.
    pub fn unexpected_token(
        token: &Token,
        expected: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken,
            Some(token.span),
            expected.into_iter().map(Into::into).collect(),
            Some(token.lexeme.clone()),
        )
    }

    /// Creates an `UnexpectedEndOfInput` error.
    pub fn unexpected_end_of_input(expected: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEndOfInput,
            None,
            expected.into_iter().map(Into::into).collect(),
            Some("EOF".to_string()),
        )
    }

    /// Creates a `NestingLimitExceeded` error.
    pub fn nesting_limit(span: Span, max: usize) -> Self {
        Self::new(
            ParseErrorKind::NestingLimitExceeded,
            Some(span),
            vec![format!("nesting <= {max}")],
            None,
        )
    }

    /// Creates an `UndefinedFunction` error.
    pub fn undefined_function(token: &Token) -> Self {
        Self::new(
            ParseErrorKind::UndefinedFunction,
            Some(token.span),
            Vec::new(),
            Some(token.lexeme.clone()),
        )
    }

    /// Wraps a keyword rewrite failure raised at `span`.
    pub fn declaration(error: DeclareSyntaxError, span: Span) -> Self {
        Self::new(ParseErrorKind::Declaration(error), Some(span), Vec::new(), None)
    }

    /// Wraps an options failure raised at `span`.
    pub fn configuration(error: ConfigurationError, span: Span) -> Self {
        Self::new(
            ParseErrorKind::Configuration(error),
            Some(span),
            Vec::new(),
            None,
        )
    }

    /// Wraps a lexer error.
    pub fn lexer_error(error: FatalLexError) -> Self {
        let span = error.diagnostic().span;
        Self::new(ParseErrorKind::Lexer(error), Some(span), Vec::new(), None)
    }

    /// Returns the keyword rewrite failure, if that is what this is.
    pub fn as_declaration(&self) -> Option<&DeclareSyntaxError> {
        match &self.kind {
            ParseErrorKind::Declaration(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected = self.expected.join(" or ");
        let found = self.found.as_deref().unwrap_or("nothing");
        match &self.kind {
            ParseErrorKind::UnexpectedToken => write!(f, "expected {expected}, found {found}"),
            ParseErrorKind::UnexpectedEndOfInput => {
                write!(f, "unexpected end of input, expected {expected}")
            }
            ParseErrorKind::NestingLimitExceeded => write!(f, "nesting too deep ({expected})"),
            ParseErrorKind::UndefinedFunction => write!(f, "undefined function {found}"),
            ParseErrorKind::Declaration(error) => write!(f, "{error}"),
            ParseErrorKind::Configuration(error) => write!(f, "{error}"),
            ParseErrorKind::Lexer(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Declaration(error) => Some(error),
            ParseErrorKind::Configuration(error) => Some(error),
            ParseErrorKind::Lexer(error) => Some(error),
            _ => None,
        }
    }
}

impl From<FatalLexError> for ParseError {
    fn from(error: FatalLexError) -> Self {
        Self::lexer_error(error)
    }
}
