//! Stylesheet variables and their substitution.
//!
//! Variables are declared inside `scope` blocks and referenced by bare name:
//!
//! ```css
//! scope {
//!     accent: 0xCC0000FF;
//!     Button { button-color: accent; }
//! }
//! ```
//!
//! A reference is an identifier token (`[A-Za-z_][A-Za-z0-9_-]*`) that is
//! not preceded by `#` and not the tail of a numeric literal like `0xFF`.
//! [`substitute`] replaces the first token naming a known variable, then
//! scans again, until no token resolves. Because values may reference other
//! variables (or themselves), the number of rounds is capped.

use std::collections::BTreeMap;

/// A name to value table. Redefining a name replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    values: BTreeMap<String, String>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Move every definition of `other` into this table.
    pub fn merge(&mut self, other: Variables) {
        self.values.extend(other.values);
    }
}

/// Read access to variables, possibly layered.
pub trait VariableLookup {
    fn lookup(&self, name: &str) -> Option<&str>;

    /// Number of visible definitions, used to bound substitution.
    fn count(&self) -> usize;
}

impl VariableLookup for Variables {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name)
    }

    fn count(&self) -> usize {
        self.len()
    }
}

/// The variables visible inside a `scope` block: its own declarations so
/// far, falling back to the global table.
pub struct ScopedVariables<'a> {
    pub global: &'a Variables,
    pub local: &'a Variables,
}

impl VariableLookup for ScopedVariables<'_> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.local.get(name).or_else(|| self.global.get(name))
    }

    fn count(&self) -> usize {
        self.global.len() + self.local.len()
    }
}

/// Byte ranges of the identifier tokens in `value`.
fn identifier_tokens(value: &str) -> Vec<(usize, usize)> {
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-';
    let mut tokens = Vec::new();
    let mut chars = value.char_indices().peekable();
    let mut prev: Option<char> = None;

    while let Some((start, c)) = chars.next() {
        if !is_word(c) {
            prev = Some(c);
            continue;
        }

        let mut end = start + c.len_utf8();
        let mut last = c;
        while let Some(&(i, next)) = chars.peek() {
            if !is_word(next) {
                break;
            }
            end = i + next.len_utf8();
            last = next;
            chars.next();
        }

        let starts_like_ident = c.is_ascii_alphabetic() || c == '_';
        if starts_like_ident && prev != Some('#') {
            tokens.push((start, end));
        }
        prev = Some(last);
    }

    tokens
}

/// Substitute variable references in `value` until none resolves.
///
/// A value without references is returned unchanged. The loop runs at most
/// `(variables + 1) * (identifier tokens + 1)` rounds; past that a warning is
/// logged and the partially substituted value returned.
pub fn substitute(value: &str, vars: &impl VariableLookup) -> String {
    if vars.count() == 0 {
        return value.to_string();
    }

    let cap = (vars.count() + 1) * (identifier_tokens(value).len() + 1);
    let mut resolved = value.to_string();

    for _ in 0..cap {
        let hit = identifier_tokens(&resolved)
            .into_iter()
            .find_map(|(start, end)| {
                vars.lookup(&resolved[start..end])
                    .map(|replacement| (start, end, replacement.to_string()))
            });

        match hit {
            Some((start, end, replacement)) => resolved.replace_range(start..end, &replacement),
            None => return resolved,
        }
    }

    log::warn!(
        "TSS: variable substitution for '{value}' stopped after {cap} rounds; \
         check for self-referencing variables"
    );
    resolved
}
