//! # TXML - markup for immediate-mode UIs
//!
//! TXML is a small XML dialect describing a GUI element tree. A document has
//! a single `<App>` root; the renderer understands a closed set of tags
//! ([`Tag`]) and ignores the rest with a warning.
//!
//! ```rust
//! use txml::parse_txml;
//!
//! let root = parse_txml(r#"
//!     <App>
//!       <Body>
//!         <Window title="Hello">
//!           <Text>Hi &amp; welcome</Text>
//!         </Window>
//!       </Body>
//!     </App>
//! "#);
//!
//! let window = root.child_elements().next().unwrap().child_elements().next().unwrap();
//! assert_eq!(window.attr("title"), Some("Hello"));
//! assert_eq!(window.child_elements().next().unwrap().text_content(), "Hi & welcome");
//! ```
//!
//! [`parse_txml`] never fails: malformed input yields a tree that shows the
//! parse error in a window. Use [`try_parse_txml`] for the typed error.
//!
//! ## Modules
//!
//! - [`parser`]: recursive-descent parser and fallback tree
//! - [`element`]: the element tree
//! - [`security`]: whitelists, strict/lenient validation, escaping
//! - [`builder`]: programmatic tree construction
//! - [`writer`]: serialization back to markup

pub mod builder;
pub mod element;
pub mod error;
pub mod number;
pub mod parser;
pub mod security;
pub mod tag;
pub mod writer;

pub use builder::ElementBuilder;
pub use element::{Element, Node};
pub use error::TxmlParseError;
pub use number::{parse_float, parse_float_or};
pub use parser::{MAX_DEPTH, parse_txml, parse_txml_with, try_parse_txml};
pub use security::{ValidationCode, ValidationError, ValidationMode, Validator};
pub use tag::{ROOT_TAG, Tag};
pub use writer::to_txml;
