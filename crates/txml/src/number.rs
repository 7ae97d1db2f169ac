//! Lenient float parsing shared by attributes and style values.
//!
//! Markup and stylesheets write numbers loosely (`"120"`, `"0.5"`, `"100px"`).
//! [`parse_float`] reads the longest numeric prefix and ignores whatever
//! follows, so `"100px"` is `100.0` while `"px"` is no number at all.

use nom::{
    IResult,
    branch::alt,
    character::complete::{char, digit1, one_of},
    combinator::{opt, recognize},
    sequence::{pair, tuple},
};

fn float_prefix(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), opt(digit1))))),
            recognize(pair(char('.'), digit1)),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

/// Parses the numeric prefix of `value`, skipping leading whitespace.
pub fn parse_float(value: &str) -> Option<f32> {
    let (_, number) = float_prefix(value.trim_start()).ok()?;
    number.parse::<f32>().ok()
}

/// Like [`parse_float`], falling back to `default` when there is no number.
pub fn parse_float_or(value: Option<&str>, default: f32) -> f32 {
    value.and_then(parse_float).unwrap_or(default)
}
