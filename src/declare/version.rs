//! Dotted numeric version literals.
//!
//! A literal is one or more digit groups separated by `.`. A group is digits
//! with optional underscore runs, each run bounded by digits on both sides:
//! `7`, `1.23`, `2_0.0`, `1__000.2`. Input that starts with anything other
//! than a digit is never a version, which keeps it apart from names.

use nom::bytes::complete::take_while;
use nom::character::complete::{char, satisfy};
use nom::combinator::recognize;
use nom::multi::many0;
use nom::sequence::{pair, preceded};
use nom::IResult;

fn digit(input: &str) -> IResult<&str, char> {
    satisfy(|c| c.is_ascii_digit())(input)
}

fn digit_group(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        digit,
        many0(pair(take_while(|c: char| c == '_'), digit)),
    ))(input)
}

fn version_literal(input: &str) -> IResult<&str, &str> {
    recognize(pair(digit_group, many0(preceded(char('.'), digit_group))))(input)
}

/// Matches the longest version literal at the start of `input`.
///
/// Returns `(literal, remainder)`, or `None` when `input` does not start with
/// a version.
pub fn recognize_version(input: &str) -> Option<(&str, &str)> {
    version_literal(input)
        .ok()
        .map(|(remainder, literal)| (literal, remainder))
}
