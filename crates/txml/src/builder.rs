//! Programmatic construction of element trees.
//!
//! [`ElementBuilder`] is the JSX-style entry point for hosts that generate
//! UIs in code rather than writing markup. Every name and value goes through
//! the same [`Validator`] the parser uses.
//!
//! In lenient mode an attribute that is not whitelisted for its tag is not
//! dropped: it is stored under [`UNKNOWN_ATTRIBUTE`], and several unknown
//! attributes on one element have their values joined with a space.
//!
//! ```
//! use txml::ElementBuilder;
//!
//! let window = ElementBuilder::new("Window")
//!     .attr("title", "Settings")
//!     .child(ElementBuilder::new("Text").text("Volume"))
//!     .build()
//!     .unwrap();
//! assert_eq!(window.attr("title"), Some("Settings"));
//! ```

use crate::element::{Element, Node};
use crate::security::{AttributeCheck, UNKNOWN_ATTRIBUTE, ValidationError, Validator};

/// Builder for a single [`Element`] and its subtree.
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    element: Element,
    validator: Validator,
    error: Option<ValidationError>,
}

impl ElementBuilder {
    /// Start an element with the default (lenient) validator.
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_validator(tag, Validator::default())
    }

    pub fn with_validator(tag: impl Into<String>, validator: Validator) -> Self {
        let element = Element::new(tag);
        let error = validator.tag(&element.tag).err();
        Self {
            element,
            validator,
            error,
        }
    }

    /// Set an attribute. Non-string values are converted with `ToString`.
    pub fn attr(mut self, name: &str, value: impl ToString) -> Self {
        if self.error.is_some() {
            return self;
        }
        let value = value.to_string();
        match self.validator.attribute(&self.element.tag, name) {
            Ok(AttributeCheck::Known) => {
                if let Err(err) = self.validator.attribute_value(name, &value) {
                    self.error = Some(err);
                } else {
                    self.element.attributes.insert(name.to_string(), value);
                }
            }
            Ok(AttributeCheck::Unknown) => {
                self.element
                    .attributes
                    .entry(UNKNOWN_ATTRIBUTE.to_string())
                    .and_modify(|joined| {
                        joined.push(' ');
                        joined.push_str(&value);
                    })
                    .or_insert(value);
            }
            Err(err) => self.error = Some(err),
        }
        self
    }

    /// Attach an event handler by name, e.g. `handler("onClick", "save")`.
    ///
    /// The name must be registered with the renderer's handler registry to be
    /// dispatched; generated names come from `HandlerRegistry::register_inline`.
    pub fn handler(self, event: &str, name: &str) -> Self {
        self.attr(event, name)
    }

    /// Append a text run.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        if self.error.is_some() {
            return self;
        }
        let text = text.into();
        match self.validator.text(&text) {
            Ok(()) => self.element.children.push(Node::Text(text)),
            Err(err) => self.error = Some(err),
        }
        self
    }

    /// Append a child subtree. An error inside the child fails this builder.
    pub fn child(mut self, child: ElementBuilder) -> Self {
        if self.error.is_some() {
            return self;
        }
        match child.build() {
            Ok(element) => self.element.children.push(Node::Element(element)),
            Err(err) => self.error = Some(err),
        }
        self
    }

    /// Append several child subtrees in order.
    pub fn children(self, children: impl IntoIterator<Item = ElementBuilder>) -> Self {
        children.into_iter().fold(self, ElementBuilder::child)
    }

    /// Finish the element, returning the first validation failure, if any.
    pub fn build(self) -> Result<Element, ValidationError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.element),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::ValidationCode;

    #[test]
    fn unknown_attributes_collapse_into_sentinel() {
        let button = ElementBuilder::new("Button")
            .attr("tooltip", "hi")
            .attr("accent", 3)
            .attr("width", 40)
            .build()
            .unwrap();
        assert_eq!(button.attr(UNKNOWN_ATTRIBUTE), Some("hi 3"));
        assert_eq!(button.attr("width"), Some("40"));
        assert_eq!(button.attr("tooltip"), None);
    }

    #[test]
    fn strict_builder_rejects_unknown_attribute() {
        let err = ElementBuilder::with_validator("Button", Validator::strict())
            .attr("tooltip", "hi")
            .build()
            .unwrap_err();
        assert_eq!(err.code, ValidationCode::InvalidAttribute);
    }

    #[test]
    fn invalid_handler_name_fails_build() {
        let err = ElementBuilder::with_validator("Button", Validator::strict())
            .handler("onClick", "do it")
            .build()
            .unwrap_err();
        assert_eq!(err.code, ValidationCode::InvalidAttributeValue);
    }

    #[test]
    fn child_errors_propagate_to_parent() {
        let result = ElementBuilder::new("Window")
            .child(ElementBuilder::new("SliderFloat").attr("max", "many"))
            .build();
        assert!(result.is_ok(), "lenient children only warn");

        let slider =
            ElementBuilder::with_validator("SliderFloat", Validator::strict()).attr("max", "many");
        let result = ElementBuilder::new("Window").child(slider).build();
        assert!(result.is_err());
    }
}
