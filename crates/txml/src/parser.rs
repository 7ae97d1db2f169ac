//! Recursive-descent parser for TXML.
//!
//! The grammar is a small XML subset:
//!
//! ```text
//! Element  := '<' Name Attrs ( '/>' | '>' Children '</' Name '>' )
//! Attrs    := ( Name '=' ( '"' .. '"' | '\'' .. '\'' ) )*
//! Children := ( Element | '<!--' .. '-->' | Text )*
//! ```
//!
//! Names are `[A-Za-z0-9_-]+`. The document must hold exactly one element,
//! whose tag is `App`. Elements nest at most [`MAX_DEPTH`] levels deep.

use crate::element::{Element, Node};
use crate::error::{Result, TxmlParseError};
use crate::security::{Validator, unescape};
use crate::tag::ROOT_TAG;

/// Deepest element nesting accepted, counting the root as level 1.
pub const MAX_DEPTH: usize = 256;

/// Parser state over a single TXML document.
pub struct Parser<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    depth: usize,
    validator: &'a Validator,
}

impl<'a> Parser<'a> {
    /// Create a parser. Surrounding whitespace of `input` is ignored.
    pub fn new(input: &'a str, validator: &'a Validator) -> Self {
        Self {
            input: input.trim(),
            pos: 0,
            line: 1,
            column: 1,
            depth: 0,
            validator,
        }
    }

    /// Parse the whole document into its root element.
    pub fn parse(mut self) -> Result<Element> {
        if self.peek() != Some('<') {
            return Err(TxmlParseError::ExpectedOpenAngle {
                line: self.line,
                column: self.column,
            });
        }

        let root = self.parse_element()?;
        if root.tag != ROOT_TAG {
            return Err(TxmlParseError::InvalidRoot { found: root.tag });
        }

        self.skip_whitespace();
        if !self.remaining().is_empty() {
            return Err(TxmlParseError::TrailingContent {
                line: self.line,
                column: self.column,
            });
        }

        Ok(root)
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume `token` if the input continues with it.
    fn consume(&mut self, token: &str) -> bool {
        if self.remaining().starts_with(token) {
            for _ in token.chars() {
                self.advance();
            }
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &'static str) -> Result<()> {
        if self.consume(token) {
            Ok(())
        } else {
            Err(TxmlParseError::ExpectedToken {
                expected: token,
                line: self.line,
                column: self.column,
            })
        }
    }

    /// Consume characters while `pred` holds, returning the consumed slice.
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
        &self.input[start..self.pos]
    }

    fn skip_whitespace(&mut self) {
        self.take_while(char::is_whitespace);
    }

    fn name(&mut self, what: &'static str) -> Result<&'a str> {
        let (line, column) = (self.line, self.column);
        let name = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if name.is_empty() {
            return Err(TxmlParseError::EmptyName { what, line, column });
        }
        Ok(name)
    }

    fn parse_element(&mut self) -> Result<Element> {
        if self.depth >= MAX_DEPTH {
            return Err(TxmlParseError::TooDeep {
                max: MAX_DEPTH,
                line: self.line,
                column: self.column,
            });
        }
        self.depth += 1;
        let element = self.parse_element_at_depth();
        self.depth -= 1;
        element
    }

    fn parse_element_at_depth(&mut self) -> Result<Element> {
        self.expect("<")?;
        let tag = self.name("tag")?;
        self.validator.tag(tag)?;

        let mut element = Element::new(tag);
        self.parse_attributes(&mut element)?;

        if self.consume("/>") {
            return Ok(element);
        }
        self.expect(">")?;

        element.children = self.parse_children()?;

        self.expect("</")?;
        let (line, column) = (self.line, self.column);
        let closing = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if closing != tag {
            return Err(TxmlParseError::MismatchedClosingTag {
                expected: tag.to_string(),
                found: closing.to_string(),
                line,
                column,
            });
        }
        self.expect(">")?;

        Ok(element)
    }

    fn parse_attributes(&mut self, element: &mut Element) -> Result<()> {
        self.skip_whitespace();
        while let Some(c) = self.peek() {
            if c == '>' || c == '/' {
                break;
            }

            let name = self.name("attribute")?;
            self.expect("=")?;
            let raw = self.parse_attribute_value()?;

            self.validator.attribute(&element.tag, name)?;
            self.validator.attribute_value(name, raw)?;
            element.attributes.insert(name.to_string(), unescape(raw));

            self.skip_whitespace();
        }
        Ok(())
    }

    fn parse_attribute_value(&mut self) -> Result<&'a str> {
        let quote = match self.peek() {
            Some(q @ ('"' | '\'')) => q,
            _ => {
                return Err(TxmlParseError::UnquotedAttributeValue {
                    line: self.line,
                    column: self.column,
                });
            }
        };
        self.advance();

        let value = self.take_while(|c| c != quote);
        if self.advance().is_none() {
            return Err(TxmlParseError::UnclosedAttributeValue {
                line: self.line,
                column: self.column,
            });
        }
        Ok(value)
    }

    fn parse_children(&mut self) -> Result<Vec<Node>> {
        let mut children = Vec::new();

        loop {
            self.skip_whitespace();
            let rest = self.remaining();
            if rest.is_empty() || rest.starts_with("</") {
                break;
            }

            if rest.starts_with("<!--") {
                self.skip_comment();
            } else if rest.starts_with('<') {
                children.push(Node::Element(self.parse_element()?));
            } else {
                let raw = self.take_while(|c| c != '<');
                self.validator.text(raw)?;
                if !raw.trim().is_empty() {
                    children.push(Node::Text(unescape(raw)));
                }
            }
        }

        Ok(children)
    }

    /// Skip a `<!-- ... -->` comment. An unterminated comment runs to the end.
    fn skip_comment(&mut self) {
        self.consume("<!--");
        while !self.remaining().is_empty() && !self.consume("-->") {
            self.advance();
        }
    }
}

/// Parse TXML, returning the typed error on failure.
pub fn try_parse_txml(source: &str, validator: &Validator) -> Result<Element> {
    Parser::new(source, validator).parse()
}

/// Parse TXML with the default (lenient) validator, never failing.
///
/// See [`parse_txml_with`].
pub fn parse_txml(source: &str) -> Element {
    parse_txml_with(source, &Validator::default())
}

/// Parse TXML, never failing.
///
/// On error the message is logged and a fallback tree is returned that
/// renders the error inside a window:
///
/// ```text
/// <App><Body><Window title="Error"><Text>TXML Parse Error: ...</Text></Window></Body></App>
/// ```
pub fn parse_txml_with(source: &str, validator: &Validator) -> Element {
    match try_parse_txml(source, validator) {
        Ok(root) => root,
        Err(err) => {
            log::error!("TXML parse error: {err}");
            error_tree(&err)
        }
    }
}

/// The tree shown in place of a document that failed to parse.
pub fn error_tree(err: &TxmlParseError) -> Element {
    Element::new(ROOT_TAG).with_child(
        Element::new("Body").with_child(
            Element::new("Window")
                .with_attr("title", "Error")
                .with_child(Element::new("Text").with_text(format!("TXML Parse Error: {err}"))),
        ),
    )
}
