//! Serialization of element trees back to TXML.

use std::fmt::Write;

use crate::element::{Element, Node};
use crate::security::escape;

/// Serialize an element tree to compact TXML.
///
/// Attribute values and text are escaped; elements without children are
/// written self-closing. Output parses back to an equal tree as long as text
/// runs carry no leading whitespace, which the parser does not preserve.
pub fn to_txml(element: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, element);
    out
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in &element.attributes {
        // Writing to a String cannot fail.
        let _ = write!(out, " {name}=\"{}\"", escape(value));
    }

    if element.is_self_closing() {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for child in &element.children {
        match child {
            Node::Element(child) => write_element(out, child),
            Node::Text(text) => out.push_str(&escape(text)),
        }
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_self_closing_and_nested_elements() {
        let tree = Element::new("App").with_child(
            Element::new("Window")
                .with_attr("title", "A & B")
                .with_child(Element::new("Separator"))
                .with_child(Element::new("Text").with_text("1 < 2")),
        );
        insta::assert_snapshot!(
            to_txml(&tree),
            @r#"<App><Window title="A &amp; B"><Separator /><Text>1 &lt; 2</Text></Window></App>"#
        );
    }

    #[test]
    fn attributes_are_written_in_sorted_order() {
        let button = Element::new("Button")
            .with_attr("width", "40")
            .with_attr("id", "ok");
        assert_eq!(to_txml(&button), r#"<Button id="ok" width="40" />"#);
    }
}
