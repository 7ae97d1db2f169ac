//! Cascade and style computation.
//!
//! - [`StyleEngine::compute_style`]: final styles for one element
//!
//! ## Cascade Algorithm
//!
//! 1. Find all rules whose selector matches the element
//! 2. Stable-sort by specificity score, so equal scores keep source order
//! 3. Apply declarations in order (later declarations override earlier)
//! 4. Resolve remaining variable references and coerce by property kind
//!
//! ## Selector Matching
//!
//! - Tag selectors match `element.tag`
//! - Class selectors match any token of the `class` attribute
//! - Id selectors match the `id` attribute
//! - Every compound left of the last must match some ancestor, scanning from
//!   the nearest parent towards the root

use txml::Element;

use crate::parser::stylesheet::{CompoundSelector, Rule, Selector, SimpleSelector, StyleSheet};
use crate::parser::variables::substitute;
use crate::types::{ComputedStyle, StyleValue};

/// Whether `element` satisfies every part of `compound`.
pub fn matches_compound(element: &Element, compound: &CompoundSelector) -> bool {
    compound.selectors.iter().all(|s| match s {
        SimpleSelector::Tag(name) => element.tag == *name,
        SimpleSelector::Class(class) => element.has_class(class),
        SimpleSelector::Id(id) => element.id() == Some(id.as_str()),
    })
}

/// Whether `selector` matches `element` given its ancestors.
///
/// `ancestors` runs from the root down to the immediate parent, the order
/// in which a tree walk pushes them.
pub fn matches_selector(element: &Element, ancestors: &[&Element], selector: &Selector) -> bool {
    let Some((last, rest)) = selector.compounds.split_last() else {
        return false;
    };
    if !matches_compound(element, last) {
        return false;
    }

    let mut chain = ancestors.iter().rev();
    rest.iter()
        .rev()
        .all(|compound| chain.any(|ancestor| matches_compound(ancestor, compound)))
}

/// Computes element styles from a parsed stylesheet.
///
/// # Example
///
/// ```
/// use tss::{StyleEngine, parse_tss};
/// use txml::Element;
///
/// let sheet = parse_tss("Window Button { width: 80; }").unwrap();
/// let engine = StyleEngine::new(&sheet);
///
/// let window = Element::new("Window");
/// let button = Element::new("Button");
/// let style = engine.compute_style(&button, &[&window]);
/// assert_eq!(style.number("width"), Some(80.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StyleEngine<'a> {
    stylesheet: &'a StyleSheet,
}

impl<'a> StyleEngine<'a> {
    pub fn new(stylesheet: &'a StyleSheet) -> Self {
        Self { stylesheet }
    }

    pub fn stylesheet(&self) -> &'a StyleSheet {
        self.stylesheet
    }

    /// Rules matching `element`, lowest specificity first.
    pub fn matching_rules(&self, element: &Element, ancestors: &[&Element]) -> Vec<&'a Rule> {
        let mut matched: Vec<&Rule> = self
            .stylesheet
            .rules
            .iter()
            .filter(|rule| matches_selector(element, ancestors, &rule.parsed))
            .collect();
        // sort_by_key is stable: source order breaks ties.
        matched.sort_by_key(|rule| rule.specificity);
        matched
    }

    /// The cascade for one element. See the module docs for the algorithm.
    pub fn compute_style(&self, element: &Element, ancestors: &[&Element]) -> ComputedStyle {
        let mut computed = ComputedStyle::new();
        for rule in self.matching_rules(element, ancestors) {
            for (property, raw) in &rule.properties {
                let resolved = substitute(raw, &self.stylesheet.variables);
                computed.set(property.as_str(), StyleValue::coerce(property, &resolved));
            }
        }
        computed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::selectors::parse_selector;

    fn selector(text: &str) -> Selector {
        parse_selector(text).unwrap()
    }

    #[test]
    fn single_compound_matches_element_only() {
        let button = Element::new("Button").with_attr("class", "primary big");
        assert!(matches_selector(&button, &[], &selector("Button")));
        assert!(matches_selector(&button, &[], &selector(".big")));
        assert!(matches_selector(&button, &[], &selector("Button.primary.big")));
        assert!(!matches_selector(&button, &[], &selector("Button#ok")));
    }

    #[test]
    fn descendant_requires_ancestor_order() {
        let app = Element::new("App");
        let window = Element::new("Window");
        let body = Element::new("Body");
        let button = Element::new("Button");

        let ancestors = [&app, &body, &window];
        assert!(matches_selector(&button, &ancestors, &selector("App Window Button")));
        assert!(matches_selector(&button, &ancestors, &selector("Body Button")));
        assert!(!matches_selector(&button, &ancestors, &selector("Window Body Button")));
        assert!(!matches_selector(&button, &[], &selector("Window Button")));
    }

    #[test]
    fn ancestor_cannot_satisfy_rightmost() {
        let window = Element::new("Window");
        let text = Element::new("Text");
        assert!(!matches_selector(&text, &[&window], &selector("Window")));
    }
}
