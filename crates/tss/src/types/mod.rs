//! Typed style values produced by the style engine.

pub mod color;
pub mod property;

use std::collections::BTreeMap;

pub use color::Rgba;
pub use property::{PropertyKind, is_known_property};

use txml::parse_float;

/// A property value after coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Color(Rgba),
    Number(f32),
    Str(String),
}

impl StyleValue {
    /// Coerce a resolved string according to the property's [`PropertyKind`].
    pub fn coerce(property: &str, value: &str) -> Self {
        match PropertyKind::of(property) {
            PropertyKind::Color => StyleValue::Color(Rgba::parse_or_white(value)),
            PropertyKind::Number => StyleValue::Number(parse_float(value).unwrap_or(0.0)),
            PropertyKind::Opacity => {
                StyleValue::Number(parse_float(value).map_or(1.0, |v| v.clamp(0.0, 1.0)))
            }
            PropertyKind::Text => StyleValue::Str(value.to_string()),
        }
    }

    pub fn as_color(&self) -> Option<Rgba> {
        match self {
            StyleValue::Color(color) => Some(*color),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f32> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// The final styles of one element, keyed by property name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComputedStyle {
    values: BTreeMap<String, StyleValue>,
}

impl ComputedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any earlier value.
    pub fn set(&mut self, property: impl Into<String>, value: StyleValue) {
        self.values.insert(property.into(), value);
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.values.get(property)
    }

    pub fn color(&self, property: &str) -> Option<Rgba> {
        self.get(property).and_then(StyleValue::as_color)
    }

    pub fn number(&self, property: &str) -> Option<f32> {
        self.get(property).and_then(StyleValue::as_number)
    }

    pub fn text(&self, property: &str) -> Option<&str> {
        self.get(property).and_then(StyleValue::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_default_to_zero() {
        assert_eq!(StyleValue::coerce("width", "120px"), StyleValue::Number(120.0));
        assert_eq!(StyleValue::coerce("margin", "auto"), StyleValue::Number(0.0));
    }

    #[test]
    fn opacity_is_clamped_and_defaults_to_one() {
        assert_eq!(StyleValue::coerce("opacity", "1.7"), StyleValue::Number(1.0));
        assert_eq!(StyleValue::coerce("opacity", "-2"), StyleValue::Number(0.0));
        assert_eq!(StyleValue::coerce("opacity", "0"), StyleValue::Number(0.0));
        assert_eq!(StyleValue::coerce("opacity", "half"), StyleValue::Number(1.0));
    }

    #[test]
    fn colors_and_strings() {
        assert_eq!(
            StyleValue::coerce("text-color", "0x00FF00FF"),
            StyleValue::Color(Rgba::rgb(0, 255, 0))
        );
        assert_eq!(
            StyleValue::coerce("font-family", "Inter"),
            StyleValue::Str("Inter".into())
        );
    }

    #[test]
    fn typed_accessors_check_the_variant() {
        let mut style = ComputedStyle::new();
        style.set("width", StyleValue::Number(10.0));
        assert_eq!(style.number("width"), Some(10.0));
        assert_eq!(style.color("width"), None);
        assert_eq!(style.len(), 1);
    }
}
