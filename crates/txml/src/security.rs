//! Validation and escaping for markup that reaches the renderer.
//!
//! The [`Validator`] checks names and values against whitelists:
//!
//! - tags against [`Tag::KNOWN`]
//! - attributes against a per-tag list (`id` and `class` are allowed everywhere)
//! - event handler values against `[A-Za-z_][A-Za-z0-9_]*`
//! - numeric attributes (`width`, `height`, `min`, `max`)
//! - text content against script-like protocols
//!
//! In [`ValidationMode::Lenient`] a failed check logs a warning and the input is
//! accepted; in [`ValidationMode::Strict`] it becomes a [`ValidationError`]
//! carrying a machine-readable [`ValidationCode`].

use std::fmt;

use phf::phf_set;
use thiserror::Error;

use crate::number::parse_float;
use crate::tag::Tag;

/// Attribute name substituted for unknown attributes by the builder in lenient mode.
pub const UNKNOWN_ATTRIBUTE: &str = "unknown-attr";

/// Attributes every tag accepts.
static GLOBAL_ATTRIBUTES: phf::Set<&'static str> = phf_set! {
    "id",
    "class",
};

/// Attributes whose value names an event handler.
static EVENT_ATTRIBUTES: phf::Set<&'static str> = phf_set! {
    "onClick",
    "onChange",
    "onInput",
    "onFocus",
    "onBlur",
};

const DANGEROUS_PROTOCOLS: [&str; 3] = ["javascript:", "data:", "vbscript:"];

fn allowed_attributes(tag: Tag) -> &'static [&'static str] {
    match tag {
        Tag::App | Tag::Head | Tag::Body | Tag::Spacing | Tag::Separator => &[],
        Tag::Window => &["title", "width", "height"],
        Tag::Text => &["color", "content", "className"],
        Tag::Button => &["onClick", "width", "color"],
        Tag::InputText => &["label", "hint", "value", "onChange", "width"],
        Tag::SliderFloat => &["label", "min", "max", "value", "onChange", "width"],
        Tag::Checkbox => &["label", "checked", "onChange", "width"],
        Tag::SameLine => &["offset", "spacing"],
        Tag::Unknown => &[],
    }
}

/// How strictly whitelist failures are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Warn and accept.
    #[default]
    Lenient,
    /// Reject with a [`ValidationError`].
    Strict,
}

/// Machine-readable classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationCode {
    InvalidTag,
    InvalidAttribute,
    InvalidAttributeValue,
    InvalidTextContent,
    InvalidTssProperty,
    InvalidTssColor,
}

impl ValidationCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationCode::InvalidTag => "INVALID_TAG",
            ValidationCode::InvalidAttribute => "INVALID_ATTRIBUTE",
            ValidationCode::InvalidAttributeValue => "INVALID_ATTRIBUTE_VALUE",
            ValidationCode::InvalidTextContent => "INVALID_TEXT_CONTENT",
            ValidationCode::InvalidTssProperty => "INVALID_TSS_PROPERTY",
            ValidationCode::InvalidTssColor => "INVALID_TSS_COLOR",
        }
    }
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A whitelist or shape check that failed in strict mode.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("security validation failed [{code}]: {message}")]
pub struct ValidationError {
    pub code: ValidationCode,
    pub message: String,
    /// Free-form description of where the failure happened.
    pub context: String,
}

impl ValidationError {
    pub fn new(code: ValidationCode, message: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: context.into(),
        }
    }
}

/// Outcome of checking an attribute name against the whitelist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeCheck {
    Known,
    /// Not whitelisted, accepted because validation is lenient.
    Unknown,
}

/// Whitelist validator shared by the markup parser, the builder and the
/// stylesheet parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    mode: ValidationMode,
}

impl Validator {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn lenient() -> Self {
        Self::new(ValidationMode::Lenient)
    }

    pub fn strict() -> Self {
        Self::new(ValidationMode::Strict)
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn is_strict(&self) -> bool {
        self.mode == ValidationMode::Strict
    }

    /// Applies the mode to the result of a whitelist check.
    ///
    /// Passing checks are always accepted. Failing checks warn in lenient
    /// mode and turn into a [`ValidationError`] in strict mode.
    pub fn admit(
        &self,
        passed: bool,
        code: ValidationCode,
        message: impl FnOnce() -> String,
        context: impl FnOnce() -> String,
    ) -> Result<(), ValidationError> {
        if passed {
            return Ok(());
        }
        let message = message();
        match self.mode {
            ValidationMode::Lenient => {
                log::warn!("[{code}] {message}");
                Ok(())
            }
            ValidationMode::Strict => Err(ValidationError::new(code, message, context())),
        }
    }

    /// Checks a tag name, returning its [`Tag`] variant.
    pub fn tag(&self, name: &str) -> Result<Tag, ValidationError> {
        let tag = Tag::from_name(name);
        self.admit(
            tag.is_known(),
            ValidationCode::InvalidTag,
            || format!("Unknown tag: {name}"),
            || format!("tag={name}"),
        )?;
        Ok(tag)
    }

    /// Checks an attribute name for the given tag.
    pub fn attribute(&self, tag: &str, name: &str) -> Result<AttributeCheck, ValidationError> {
        let known = GLOBAL_ATTRIBUTES.contains(name)
            || allowed_attributes(Tag::from_name(tag))
                .iter()
                .any(|allowed| *allowed == name);
        self.admit(
            known,
            ValidationCode::InvalidAttribute,
            || format!("Unknown attribute: {name} for tag {tag}"),
            || format!("tag={tag} attribute={name}"),
        )?;
        Ok(if known {
            AttributeCheck::Known
        } else {
            AttributeCheck::Unknown
        })
    }

    /// Checks the shape of an attribute value.
    pub fn attribute_value(&self, name: &str, value: &str) -> Result<(), ValidationError> {
        let (passed, expectation) = if is_event_attribute(name) {
            (is_handler_name(value), "a handler name ([A-Za-z_][A-Za-z0-9_]*)")
        } else if name == "width" || name == "height" {
            (
                parse_float(value).is_some_and(|n| n >= 0.0),
                "a non-negative number",
            )
        } else if name == "min" || name == "max" {
            (parse_float(value).is_some(), "a number")
        } else {
            (true, "")
        };
        self.admit(
            passed,
            ValidationCode::InvalidAttributeValue,
            || format!("Attribute '{name}' must be {expectation}, got '{value}'"),
            || format!("attribute={name} value={value}"),
        )
    }

    /// Checks a text run for script-like protocols.
    pub fn text(&self, text: &str) -> Result<(), ValidationError> {
        let lowered = text.to_ascii_lowercase();
        let dangerous = DANGEROUS_PROTOCOLS.iter().any(|p| lowered.contains(p));
        self.admit(
            !dangerous,
            ValidationCode::InvalidTextContent,
            || "Text content contains a potentially dangerous protocol".to_string(),
            || format!("text={text}"),
        )
    }
}

/// Whether the attribute carries an event handler name (`onClick`, `onChange`, ...).
pub fn is_event_attribute(name: &str) -> bool {
    EVENT_ATTRIBUTES.contains(name)
        || (name.starts_with("on") && name[2..].starts_with(|c: char| c.is_ascii_uppercase()))
}

/// Whether `value` is usable as an event handler name.
pub fn is_handler_name(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Escapes `& < > " '` for embedding in markup.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Reverses [`escape`]. Unrecognized entities are left untouched.
pub fn unescape(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }
    const ENTITIES: [(&str, char); 6] = [
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&#39;", '\''),
        ("&#x27;", '\''),
    ];

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];
        match ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity)) {
            Some((entity, c)) => {
                out.push(*c);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
