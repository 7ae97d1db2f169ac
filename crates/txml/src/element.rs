//! The TXML element tree.
//!
//! A parsed document is a tree of [`Element`]s whose children are either
//! nested elements or text runs. Elements own their children; there is no
//! parent pointer. Code that needs ancestry (selector matching, stable ids)
//! receives the ancestor chain explicitly from the tree walk.

use std::collections::BTreeMap;

use crate::tag::Tag;

/// A child of an [`Element`]: either a nested element or a text run.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// A TXML element: tag, attributes and ordered children.
///
/// Attributes are kept in a sorted map so serialization is deterministic;
/// their source order carries no meaning.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Append a child element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Append a text run.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// The recognized tag variant for this element.
    pub fn kind(&self) -> Tag {
        Tag::from_name(&self.tag)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// The explicit `id` attribute, if non-empty.
    pub fn id(&self) -> Option<&str> {
        self.attr("id").filter(|id| !id.is_empty())
    }

    /// Tokens of the whitespace-separated `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or_default().split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Concatenation of the text children, trimmed.
    ///
    /// Nested elements never contribute, even if they contain text themselves.
    pub fn text_content(&self) -> String {
        let joined: String = self.children.iter().filter_map(Node::as_text).collect();
        joined.trim().to_string()
    }

    /// Iterator over the element children, skipping text runs.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// An element without children serializes as `<Tag />`.
    pub fn is_self_closing(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_content_ignores_nested_elements() {
        let element = Element::new("Button")
            .with_text("  Save ")
            .with_child(Element::new("Text").with_text("ignored"))
            .with_text("all  ");
        assert_eq!(element.text_content(), "Save all");
    }

    #[test]
    fn classes_split_on_whitespace() {
        let element = Element::new("Button").with_attr("class", " primary  wide ");
        assert_eq!(element.classes().collect::<Vec<_>>(), vec!["primary", "wide"]);
        assert!(element.has_class("wide"));
        assert!(!element.has_class("prim"));
    }

    #[test]
    fn empty_id_is_treated_as_missing() {
        let element = Element::new("Window").with_attr("id", "");
        assert_eq!(element.id(), None);
    }
}
