//! Token contracts for the host lexer.

use crate::lexer::span::Span;

/// Token categories of the host language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier, possibly `::`-qualified (`Foo::Bar`).
    Name,
    /// Numeric literal (`7`, `1.23`, `2_0.0`).
    Number,
    /// Double-quoted string literal. The lexeme holds the decoded value.
    Str,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
}

impl TokenKind {
    /// Returns a short label used in parse diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Number => "number",
            Self::Str => "string",
            Self::LeftParen => "`(`",
            Self::RightParen => "`)`",
            Self::LeftBrace => "`{`",
            Self::RightBrace => "`}`",
            Self::Comma => "`,`",
            Self::Semicolon => "`;`",
        }
    }

    pub(crate) fn from_punctuation(byte: u8) -> Option<Self> {
        match byte {
            b'(' => Some(Self::LeftParen),
            b')' => Some(Self::RightParen),
            b'{' => Some(Self::LeftBrace),
            b'}' => Some(Self::RightBrace),
            b',' => Some(Self::Comma),
            b';' => Some(Self::Semicolon),
            _ => None,
        }
    }
}

/// A lexical token with its text and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token category.
    pub kind: TokenKind,
    /// Token text. Raw for every kind except [`TokenKind::Str`].
    pub lexeme: String,
    /// Byte span in the buffer at lex time.
    pub span: Span,
}

impl Token {
    /// Creates a token value.
    pub fn new(kind: TokenKind, lexeme: String, span: Span) -> Self {
        Self { kind, lexeme, span }
    }

    /// Returns `true` for a name token spelled exactly `word`.
    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Name && self.lexeme == word
    }
}

/// One step produced by [`crate::lexer::Lexer::next_token`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexStep {
    /// A concrete token was produced.
    Token(Token),
    /// End of input was reached.
    EndOfInput,
}
