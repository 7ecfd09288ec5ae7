//! On-demand lexer for the host language.
//!
//! The lexer does not own its input. Every call receives the current buffer,
//! so text spliced in by a keyword rewrite right after the cursor is the next
//! thing scanned, and nothing before the cursor is ever scanned twice.

pub mod diagnostics;
pub mod span;
pub mod token;

mod cursor;

use crate::lexer::cursor::Cursor;

pub use diagnostics::{DiagnosticCode, FatalLexError, LexDiagnostic};
pub use span::{ByteOffset, Span};
pub use token::{LexStep, Token, TokenKind};

/// Separator between segments of a qualified name.
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Incremental lexer positioned inside a live buffer.
#[derive(Debug, Clone)]
pub struct Lexer {
    cursor: Cursor,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    /// Creates a lexer at the start of the buffer.
    pub fn new() -> Self {
        Self {
            cursor: Cursor::new(),
        }
    }

    /// Returns the current byte offset.
    pub fn offset(&self) -> ByteOffset {
        self.cursor.offset()
    }

    /// Tokenizes a whole input. Intended for inspection and tests.
    pub fn tokenize(input: &str) -> Result<Vec<Token>, FatalLexError> {
        let mut lexer = Self::new();
        let mut tokens = Vec::new();
        while let LexStep::Token(token) = lexer.next_token(input)? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Scans the next token without consuming it.
    pub fn peek_token(&mut self, input: &str) -> Result<LexStep, FatalLexError> {
        let checkpoint = self.cursor.checkpoint();
        let step = self.next_token(input);
        self.cursor.rollback(checkpoint);
        step
    }

    /// Scans and returns the next token.
    pub fn next_token(&mut self, input: &str) -> Result<LexStep, FatalLexError> {
        self.skip_insignificant(input);

        let Some(byte) = self.cursor.peek_byte(input) else {
            return Ok(LexStep::EndOfInput);
        };
        let start = self.cursor.offset();

        if let Some(kind) = TokenKind::from_punctuation(byte) {
            self.cursor.advance_by(1, input);
            return Ok(LexStep::Token(self.token_from(kind, start, input)));
        }

        if byte == b'"' {
            return self.scan_string(input).map(LexStep::Token);
        }

        let remaining = self.cursor.remaining(input);
        let name_len = name_len(remaining);
        if name_len > 0 {
            self.cursor.advance_by(name_len, input);
            return Ok(LexStep::Token(self.token_from(TokenKind::Name, start, input)));
        }

        if byte.is_ascii_digit() {
            let len = number_len(remaining);
            self.cursor.advance_by(len, input);
            return Ok(LexStep::Token(self.token_from(TokenKind::Number, start, input)));
        }

        let ch = remaining.chars().next().unwrap_or('\u{fffd}');
        self.cursor.advance_by(ch.len_utf8(), input);
        Err(FatalLexError::UnexpectedCharacter(LexDiagnostic::new(
            DiagnosticCode::UnexpectedCharacter,
            format!("unexpected character {ch:?}"),
            Span::new(start, self.cursor.offset()),
        )))
    }

    fn skip_insignificant(&mut self, input: &str) {
        let len = insignificant_len(input, self.cursor.offset().as_usize());
        self.cursor.advance_by(len, input);
    }

    fn token_from(&self, kind: TokenKind, start: ByteOffset, input: &str) -> Token {
        let end = self.cursor.offset();
        let lexeme = input
            .get(start.as_usize()..end.as_usize())
            .unwrap_or_default()
            .to_string();
        Token::new(kind, lexeme, Span::new(start, end))
    }

    fn scan_string(&mut self, input: &str) -> Result<Token, FatalLexError> {
        let start = self.cursor.offset();
        self.cursor.advance_by(1, input);

        let mut value = String::new();
        let mut chars = self.cursor.remaining(input).char_indices();
        while let Some((index, ch)) = chars.next() {
            match ch {
                '"' => {
                    self.cursor.advance_by(index + 1, input);
                    return Ok(Token::new(
                        TokenKind::Str,
                        value,
                        Span::new(start, self.cursor.offset()),
                    ));
                }
                '\\' => match chars.next() {
                    Some((_, 'n')) => value.push('\n'),
                    Some((_, 't')) => value.push('\t'),
                    Some((_, escaped)) => value.push(escaped),
                    None => break,
                },
                other => value.push(other),
            }
        }

        self.cursor.advance_by(input.len(), input);
        Err(FatalLexError::UnterminatedString(LexDiagnostic::new(
            DiagnosticCode::UnterminatedString,
            "unterminated string literal",
            Span::new(start, self.cursor.offset()),
        )))
    }
}

/// Returns how many bytes of whitespace and `#` comments start at `at`.
pub fn insignificant_len(input: &str, at: usize) -> usize {
    let bytes = input.as_bytes();
    let mut index = at;
    while let Some(&byte) = bytes.get(index) {
        if byte.is_ascii_whitespace() {
            index += 1;
        } else if byte == b'#' {
            while let Some(&byte) = bytes.get(index) {
                if byte == b'\n' {
                    break;
                }
                index += 1;
            }
        } else {
            break;
        }
    }
    index.saturating_sub(at)
}

/// Encodes `value` as a host string literal that lexes back to `value`.
pub fn quote_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}

fn is_word_start(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphabetic()
}

fn is_word_byte(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphanumeric()
}

fn word_len(bytes: &[u8]) -> usize {
    match bytes.first() {
        Some(&first) if is_word_start(first) => {
            1 + bytes[1..].iter().take_while(|&&b| is_word_byte(b)).count()
        }
        _ => 0,
    }
}

fn name_len(input: &str) -> usize {
    let bytes = input.as_bytes();
    let mut len = word_len(bytes);
    if len == 0 {
        return 0;
    }
    let separator = NAMESPACE_SEPARATOR.as_bytes();
    while bytes[len..].starts_with(separator) {
        let segment = word_len(&bytes[len + separator.len()..]);
        if segment == 0 {
            break;
        }
        len += separator.len() + segment;
    }
    len
}

fn number_len(input: &str) -> usize {
    let bytes = input.as_bytes();
    let mut len = 0;
    while let Some(&byte) = bytes.get(len) {
        let continues_group = byte.is_ascii_digit() || byte == b'_';
        let starts_group =
            byte == b'.' && bytes.get(len + 1).is_some_and(|next| next.is_ascii_digit());
        if !(continues_group || starts_group) {
            break;
        }
        len += 1;
    }
    len
}
