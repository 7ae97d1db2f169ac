//! # TSS - stylesheets for TXML
//!
//! TSS is a CSS-like dialect for styling TXML element trees. It has
//! variables (declared in `scope` blocks and referenced by bare name),
//! descendant selectors and a whitelisted property set.
//!
//! - **Parsing**: [`parse_tss`] turns source text into a [`StyleSheet`]
//! - **Cascade**: [`StyleEngine`] computes an element's [`ComputedStyle`]
//! - **Types**: packed [`Rgba`](types::Rgba) colors and typed [`StyleValue`]s
//!
//! ## Quick Start
//!
//! ```rust
//! use tss::{StyleEngine, parse_tss};
//! use txml::Element;
//!
//! let sheet = parse_tss(r#"
//!     scope {
//!         accent: 0xCC0000FF;
//!         Button { button-color: accent; }
//!     }
//!
//!     /* ids beat classes beat tags */
//!     Button { width: 80; }
//!     #save { width: 120; }
//! "#).expect("valid TSS");
//!
//! let engine = StyleEngine::new(&sheet);
//! let save = Element::new("Button").with_attr("id", "save");
//! let style = engine.compute_style(&save, &[]);
//!
//! assert_eq!(style.number("width"), Some(120.0));
//! assert_eq!(style.color("button-color").unwrap().r(), 0xCC);
//! ```
//!
//! ## Supported Features
//!
//! ### Selectors
//! - Tag selectors: `Button`, `Window`
//! - Class selectors: `.primary`
//! - Id selectors: `#save`
//! - Compound selectors: `Button.primary#save`
//! - Descendant selectors: `Window Button`
//!
//! ### Values
//! - Colors: `0xRRGGBBAA`, `0xRRGGBB`, `#rgb`, `#rrggbb`, `rgb(r, g, b)`
//! - Numbers: `width`, `height`, `padding`, `margin`, `font-size`, `border-radius`
//! - `opacity`, clamped to `[0, 1]`
//!
//! ## Modules
//!
//! - [`parser`]: parsing, selectors, variables and the cascade
//! - [`types`]: colors, properties and computed values
//! - [`error`]: error types

pub mod error;
pub mod parser;
pub mod types;

pub use error::{ColorParseError, TssError};
pub use parser::{
    Rule, Selector, StyleEngine, StyleSheet, Variables, parse_tss, parse_tss_with, try_parse_tss,
};
pub use types::{ComputedStyle, Rgba, StyleValue};
