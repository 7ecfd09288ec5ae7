use nsblock::lexer::{DiagnosticCode, FatalLexError, Lexer};

#[test]
fn unterminated_string_reports_its_start() {
    let error = Lexer::tokenize("a \"open").expect_err("string never closes");

    assert!(matches!(error, FatalLexError::UnterminatedString(_)));
    assert_eq!(error.diagnostic().code, DiagnosticCode::UnterminatedString);
    assert_eq!(error.diagnostic().span.start.as_usize(), 2);
}

#[test]
fn unexpected_character_is_fatal() {
    let error = Lexer::tokenize("a + b").expect_err("`+` starts no token");

    assert!(matches!(error, FatalLexError::UnexpectedCharacter(_)));
    assert_eq!(error.diagnostic().span.len(), 1);
    assert!(error.to_string().contains("'+'"));
}

#[test]
fn multibyte_characters_are_skipped_whole() {
    let error = Lexer::tokenize("é").expect_err("non-ASCII starts no token");

    assert_eq!(error.diagnostic().span.len(), 2);
}
