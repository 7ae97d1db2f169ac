//! TSS parsing and stylesheet data structures.
//!
//! - [`parse_tss`] / [`try_parse_tss`]: main entry points
//! - [`StyleSheet`]: variables plus rules in source order
//! - [`Rule`]: a selector with its declarations and specificity
//!
//! ## Grammar
//!
//! ```text
//! Stylesheet := ( ScopeBlock | AtRule | Rule )*
//! ScopeBlock := 'scope' '{' ( VarDecl | Rule )* '}'
//! VarDecl    := Ident ':' Value ';'
//! Rule       := Selector '{' ( Ident ':' Value ';' )* '}'
//! ```
//!
//! `/* */` comments may appear wherever whitespace may. At-rules (`@import`,
//! `@media`, ...) are skipped.
//!
//! ## Submodules
//!
//! - [`cascade`]: selector matching and style computation
//! - [`selectors`]: selector parsing
//! - [`stylesheet`]: rules, selectors and specificity
//! - [`values`]: lexical pieces (trivia, identifiers, values)
//! - [`variables`]: variable tables and substitution

pub mod cascade;
pub mod selectors;
pub mod stylesheet;
pub mod values;
pub mod variables;

pub use crate::parser::cascade::StyleEngine;
pub use crate::parser::stylesheet::{
    CompoundSelector, Rule, Selector, SimpleSelector, Specificity, StyleSheet,
};
pub use crate::parser::variables::{ScopedVariables, VariableLookup, Variables, substitute};

use nom::character::complete::char;
use txml::{ValidationCode, Validator};

use crate::error::{Result, TssError};
use crate::parser::selectors::parse_selector;
use crate::parser::values::{
    parse_ident, parse_value, scope_open, selector_text, skip_at_rule, skip_trivia,
    strip_comments,
};
use crate::types::{Rgba, is_known_property};

/// Properties whose value must be a color.
const VALIDATED_COLOR_PROPERTIES: [&str; 3] =
    ["text-color", "button-color", "widget-background-color"];

type Step<'a, T> = Result<(&'a str, T)>;

/// Single-pass parser over one stylesheet source.
struct TssParser<'a> {
    source: &'a str,
    validator: &'a Validator,
}

impl<'a> TssParser<'a> {
    fn new(source: &'a str, validator: &'a Validator) -> Self {
        Self { source, validator }
    }

    /// A syntax error located where `remaining` starts.
    fn error(&self, remaining: &str, message: impl Into<String>) -> TssError {
        let consumed = &self.source[..self.source.len() - remaining.len()];
        let line = consumed.matches('\n').count() + 1;
        let column = consumed
            .rsplit('\n')
            .next()
            .map_or(0, |last| last.chars().count())
            + 1;
        TssError::InvalidSyntax {
            message: message.into(),
            line,
            column,
        }
    }

    fn expect(&self, input: &'a str, c: char, message: &str) -> Result<&'a str> {
        let step: nom::IResult<&str, char> = char(c)(input);
        step.map(|(rest, _)| rest).map_err(|_| self.error(input, message))
    }

    fn parse(&self) -> Result<StyleSheet> {
        let mut sheet = StyleSheet::default();
        let mut input = skip_trivia(self.source);

        while !input.is_empty() {
            input = if let Ok((body, ())) = scope_open(input) {
                let (rest, (locals, rules)) = self.scope_block(body, &sheet.variables)?;
                sheet.variables.merge(locals);
                sheet.rules.extend(rules);
                rest
            } else if input.starts_with('@') {
                skip_at_rule(input)
            } else {
                let (rest, rule) = self.rule(input, &sheet.variables)?;
                sheet.rules.push(rule);
                rest
            };
            input = skip_trivia(input);
        }

        log::debug!(
            "TSS: parsed {} rules and {} variables",
            sheet.rules.len(),
            sheet.variables.len()
        );
        Ok(sheet)
    }

    /// The body of a `scope` block, after its `{`.
    fn scope_block(
        &self,
        input: &'a str,
        global: &Variables,
    ) -> Step<'a, (Variables, Vec<Rule>)> {
        let mut locals = Variables::new();
        let mut rules = Vec::new();
        let mut input = skip_trivia(input);

        loop {
            if input.is_empty() {
                return Err(self.error(input, "expected '}' to close scope block"));
            }
            if let Some(rest) = input.strip_prefix('}') {
                return Ok((rest, (locals, rules)));
            }

            input = if let Some((rest, (name, value))) = self.variable(input)? {
                locals.define(name, value);
                rest
            } else {
                let scoped = ScopedVariables {
                    global,
                    local: &locals,
                };
                let (rest, rule) = self.rule(input, &scoped)?;
                rules.push(rule);
                rest
            };
            input = skip_trivia(input);
        }
    }

    /// A `name: value;` declaration inside a scope, or `None` if the input
    /// starts a rule instead.
    fn variable(&self, input: &'a str) -> Result<Option<(&'a str, (&'a str, &'a str))>> {
        let Ok((after_name, name)) = parse_ident(input) else {
            return Ok(None);
        };
        let after_name = skip_trivia(after_name);
        let Some(after_colon) = after_name.strip_prefix(':') else {
            return Ok(None);
        };

        let (rest, value) = self.value(skip_trivia(after_colon))?;
        let rest = self.expect(skip_trivia(rest), ';', "expected ';' after variable value")?;
        Ok(Some((rest, (name, value))))
    }

    fn value(&self, input: &'a str) -> Step<'a, &'a str> {
        parse_value(input).map_err(|_| self.error(input, "unterminated quoted value"))
    }

    fn rule(&self, input: &'a str, vars: &impl VariableLookup) -> Step<'a, Rule> {
        let (after_selector, selector) =
            selector_text(input).map_err(|_| self.error(input, "expected selector"))?;
        if after_selector.is_empty() {
            return Err(self.error(after_selector, "expected '{' after selector"));
        }
        let selector = strip_comments(selector);
        let selector = selector.trim();
        let parsed = parse_selector(selector)
            .ok_or_else(|| self.error(input, format!("invalid selector '{selector}'")))?;

        let mut rule = Rule::new(selector, parsed);
        let body = self.expect(after_selector, '{', "expected '{' after selector")?;
        let mut input = skip_trivia(body);

        while let Some(c) = input.chars().next() {
            if c == '}' {
                return Ok((&input[1..], rule));
            }
            let (rest, (name, value)) = self.declaration(input, vars)?;
            rule.properties.insert(name.to_string(), value);
            input = skip_trivia(rest);
        }

        Err(self.error(input, "expected '}' after declarations"))
    }

    fn declaration(
        &self,
        input: &'a str,
        vars: &impl VariableLookup,
    ) -> Step<'a, (&'a str, String)> {
        let (rest, name) =
            parse_ident(input).map_err(|_| self.error(input, "expected property name"))?;
        let rest = self.expect(skip_trivia(rest), ':', "expected ':' after property name")?;
        let (rest, raw) = self.value(skip_trivia(rest))?;
        let value = substitute(raw, vars);

        self.validator.admit(
            is_known_property(name),
            ValidationCode::InvalidTssProperty,
            || format!("TSS property '{name}' is not allowed"),
            || format!("property={name}"),
        )?;
        let validated_color = VALIDATED_COLOR_PROPERTIES.iter().any(|p| *p == name);
        if self.validator.is_strict() && validated_color {
            self.validator.admit(
                Rgba::parse(&value).is_ok(),
                ValidationCode::InvalidTssColor,
                || format!("Invalid color format '{value}' for '{name}'"),
                || format!("property={name} value={value}"),
            )?;
        }

        let rest = self.expect(skip_trivia(rest), ';', "expected ';' after property value")?;
        Ok((rest, (name, value)))
    }
}

/// Parse a stylesheet, returning the typed error on failure.
pub fn try_parse_tss(source: &str, validator: &Validator) -> Result<StyleSheet> {
    TssParser::new(source, validator).parse()
}

/// Parse a stylesheet with the default (lenient) validator.
///
/// Errors are logged and yield `None`; there is no fallback stylesheet.
pub fn parse_tss(source: &str) -> Option<StyleSheet> {
    parse_tss_with(source, &Validator::default())
}

/// Like [`parse_tss`] with an explicit validator.
pub fn parse_tss_with(source: &str, validator: &Validator) -> Option<StyleSheet> {
    match try_parse_tss(source, validator) {
        Ok(sheet) => Some(sheet),
        Err(err) => {
            log::error!("TSS parsing failed: {err}");
            None
        }
    }
}
