//! Optional name and version tokens following a keyword.
//!
//! Both strippers remove their token from the buffer on success and leave
//! the cursor untouched when the token is absent.

use nom::bytes::complete::{tag, take_while};
use nom::character::complete::satisfy;
use nom::combinator::recognize;
use nom::multi::many0;
use nom::sequence::{pair, preceded};
use nom::IResult;

use crate::declare::cursor::DeclarationCursor;
use crate::declare::host::DeclarationSite;
use crate::declare::version::recognize_version;
use crate::lexer::NAMESPACE_SEPARATOR;
use crate::parser::is_reserved;

/// One `[A-Za-z_][A-Za-z0-9_]*` segment.
pub(crate) fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c == '_' || c.is_ascii_alphabetic()),
        take_while(|c: char| c == '_' || c.is_ascii_alphanumeric()),
    ))(input)
}

/// Identifier segments joined by the namespace separator.
pub(crate) fn dotted_identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        identifier,
        many0(preceded(tag(NAMESPACE_SEPARATOR), identifier)),
    ))(input)
}

/// Strips a namespace name such as `Foo::Bar`.
///
/// Reserved words are never names, so `module do { ... }` leaves `do` in
/// place for the block check to reject.
pub fn strip_name<S: DeclarationSite + ?Sized>(
    cursor: &mut DeclarationCursor<'_, S>,
) -> Option<String> {
    let len = {
        let rest = cursor.peek_significant();
        if rest.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }
        let (_, name) = dotted_identifier(rest).ok()?;
        if is_reserved(name) {
            return None;
        }
        name.len()
    };
    cursor.skip_insignificant();
    Some(cursor.strip(len))
}

/// Strips a version literal such as `1.23`.
pub fn strip_version<S: DeclarationSite + ?Sized>(
    cursor: &mut DeclarationCursor<'_, S>,
) -> Option<String> {
    let len = {
        let (literal, _) = recognize_version(cursor.peek_significant())?;
        literal.len()
    };
    cursor.skip_insignificant();
    Some(cursor.strip(len))
}
