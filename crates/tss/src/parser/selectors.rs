use nom::{
    IResult,
    branch::alt,
    character::complete::char,
    combinator::{all_consuming, map, opt},
    multi::many0,
    sequence::preceded,
};

use crate::parser::stylesheet::{CompoundSelector, Selector, SimpleSelector};
use crate::parser::values::parse_ident;

/// Parses a `.class` or `#id` part.
fn parse_qualifier(input: &str) -> IResult<&str, SimpleSelector> {
    alt((
        map(preceded(char('#'), parse_ident), |s| {
            SimpleSelector::Id(s.to_string())
        }),
        map(preceded(char('.'), parse_ident), |s| {
            SimpleSelector::Class(s.to_string())
        }),
    ))(input)
}

/// Parses a compound selector (e.g. `Button.primary#ok`, `.wide`, `Window`).
pub fn parse_compound_selector(input: &str) -> IResult<&str, CompoundSelector> {
    let (input, tag) = opt(map(parse_ident, |s| SimpleSelector::Tag(s.to_string())))(input)?;
    let (input, qualifiers) = many0(parse_qualifier)(input)?;

    let selectors: Vec<SimpleSelector> = tag.into_iter().chain(qualifiers).collect();
    if selectors.is_empty() {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Verify,
        )));
    }
    Ok((input, CompoundSelector::new(selectors)))
}

/// Parses a whole descendant selector such as `Window .toolbar Button`.
///
/// Returns `None` for an empty selector or one using syntax outside the
/// supported subset (combinators, pseudo-classes, attribute selectors, lists).
pub fn parse_selector(text: &str) -> Option<Selector> {
    let compounds = text
        .split_whitespace()
        .map(|token| {
            all_consuming(parse_compound_selector)(token)
                .ok()
                .map(|(_, compound)| compound)
        })
        .collect::<Option<Vec<_>>>()?;

    if compounds.is_empty() {
        None
    } else {
        Some(Selector::new(compounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compound_parts() {
        let selector = parse_selector("Button.primary#ok").unwrap();
        assert_eq!(
            selector.compounds[0].selectors,
            vec![
                SimpleSelector::Tag("Button".into()),
                SimpleSelector::Class("primary".into()),
                SimpleSelector::Id("ok".into()),
            ]
        );
        assert_eq!(selector.specificity().score(), 111);
    }

    #[test]
    fn descendant_tokens_sum_specificity() {
        let selector = parse_selector("Window  .toolbar\n#save").unwrap();
        assert_eq!(selector.compounds.len(), 3);
        assert_eq!(selector.specificity().score(), 111);
    }

    #[test]
    fn rejects_unsupported_syntax() {
        assert_eq!(parse_selector(""), None);
        assert_eq!(parse_selector("   "), None);
        assert_eq!(parse_selector("Window > Button"), None);
        assert_eq!(parse_selector("Button:hover"), None);
        assert_eq!(parse_selector("Button, Text"), None);
        assert_eq!(parse_selector("."), None);
    }
}
