use std::collections::BTreeMap;

use crate::parser::variables::Variables;

/// Selector specificity.
///
/// Rules are ordered by [`Specificity::score`], which weighs one id as 100,
/// one class as 10 and one tag as 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Specificity {
    pub ids: u32,
    pub classes: u32,
    pub tags: u32,
}

impl Specificity {
    pub fn score(self) -> u32 {
        100 * self.ids + 10 * self.classes + self.tags
    }
}

impl std::ops::Add for Specificity {
    type Output = Specificity;

    fn add(self, rhs: Specificity) -> Specificity {
        Specificity {
            ids: self.ids + rhs.ids,
            classes: self.classes + rhs.classes,
            tags: self.tags + rhs.tags,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimpleSelector {
    Tag(String),
    Class(String),
    Id(String),
}

/// Simple selectors written without whitespace, e.g. `Button.primary#ok`.
/// All of them must hold for the compound to match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompoundSelector {
    pub selectors: Vec<SimpleSelector>,
}

impl CompoundSelector {
    pub fn new(selectors: Vec<SimpleSelector>) -> Self {
        Self { selectors }
    }

    pub fn specificity(&self) -> Specificity {
        let mut spec = Specificity::default();
        for s in &self.selectors {
            match s {
                SimpleSelector::Id(_) => spec.ids += 1,
                SimpleSelector::Class(_) => spec.classes += 1,
                SimpleSelector::Tag(_) => spec.tags += 1,
            }
        }
        spec
    }
}

/// Whitespace-separated compounds; every compound but the last names an
/// ancestor (descendant combinator).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    pub compounds: Vec<CompoundSelector>,
}

impl Selector {
    pub fn new(compounds: Vec<CompoundSelector>) -> Self {
        Self { compounds }
    }

    pub fn specificity(&self) -> Specificity {
        self.compounds
            .iter()
            .map(CompoundSelector::specificity)
            .fold(Specificity::default(), |acc, s| acc + s)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    /// The selector as written, trimmed.
    pub selector: String,
    pub parsed: Selector,
    /// Declarations after parse-time variable substitution. A repeated
    /// property keeps its last value.
    pub properties: BTreeMap<String, String>,
    pub specificity: u32,
}

impl Rule {
    pub fn new(selector: impl Into<String>, parsed: Selector) -> Self {
        let specificity = parsed.specificity().score();
        Self {
            selector: selector.into(),
            parsed,
            properties: BTreeMap::new(),
            specificity,
        }
    }
}

/// A parsed stylesheet: the variable table and the rules in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleSheet {
    pub variables: Variables,
    pub rules: Vec<Rule>,
}
