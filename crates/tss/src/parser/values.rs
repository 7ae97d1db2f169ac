//! Lexical pieces of TSS: trivia, identifiers, values and at-rules.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_till, take_until, take_while, take_while1},
    character::complete::{char, multispace1},
    combinator::{map, opt, recognize, rest, value},
    multi::many0_count,
    sequence::{delimited, pair, preceded},
};

/// Parses an identifier (alphanumerics, dashes and underscores).
///
/// Used for property names, variable names and selector parts.
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_')(input)
}

/// A `/* ... */` comment. An unterminated comment runs to the end of input.
fn block_comment(input: &str) -> IResult<&str, &str> {
    recognize(preceded(
        tag("/*"),
        alt((
            recognize(pair(take_until("*/"), tag("*/"))),
            rest,
        )),
    ))(input)
}

/// Skips whitespace and comments. Never fails.
pub fn skip_trivia(input: &str) -> &str {
    let parsed: IResult<&str, usize> = many0_count(alt((multispace1, block_comment)))(input);
    match parsed {
        Ok((remaining, _)) => remaining,
        Err(_) => input,
    }
}

/// A declaration value: quoted (quotes removed, newlines allowed) or a bare
/// run of characters up to whitespace, `;` or `}`.
///
/// A quoted value without its closing quote fails.
pub fn parse_value(input: &str) -> IResult<&str, &str> {
    match input.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            delimited(char(quote), take_till(move |c: char| c == quote), char(quote))(input)
        }
        _ => take_till(|c: char| c.is_whitespace() || c == ';' || c == '}')(input),
    }
}

/// The `scope` keyword followed by trivia and `{`.
pub fn scope_open(input: &str) -> IResult<&str, ()> {
    let (input, _) = tag("scope")(input)?;
    let input = skip_trivia(input);
    value((), char('{'))(input)
}

/// Skips an at-rule: through the next `;`, or across a balanced `{ }` block
/// if one opens first. Unterminated at-rules run to the end of input.
pub fn skip_at_rule(input: &str) -> &str {
    let head: IResult<&str, &str> =
        preceded(char('@'), take_till(|c: char| c == ';' || c == '{'))(input);
    let Ok((after_head, _)) = head else {
        return input;
    };

    let block: IResult<&str, Option<char>> = opt(char(';'))(after_head);
    if let Ok((after, Some(_))) = block {
        return after;
    }

    let mut depth = 0usize;
    for (i, c) in after_head.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return &after_head[i + 1..];
                }
            }
            _ => {}
        }
    }
    ""
}

/// Text up to (not including) the next `{`.
pub fn selector_text(input: &str) -> IResult<&str, &str> {
    map(take_while(|c: char| c != '{'), str::trim)(input)
}

/// Replaces `/* */` comments in `input` with a single space each.
pub fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        out.push(' ');
        rest = match rest[start + 2..].find("*/") {
            Some(end) => &rest[start + 2 + end + 2..],
            None => "",
        };
    }
    out.push_str(rest);
    out
}
