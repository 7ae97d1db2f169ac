//! Error types for TXML parsing.

use thiserror::Error;

use crate::security::ValidationError;

/// Errors that can occur when parsing TXML markup.
///
/// Structural errors carry the 1-based line and column where the parser
/// stopped.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TxmlParseError {
    /// The document does not begin with `<`.
    #[error("expected document to start with '<' at line {line}, column {column}")]
    ExpectedOpenAngle { line: usize, column: usize },

    /// A token such as `=`, `>` or `</` was required.
    #[error("expected {expected} at line {line}, column {column}")]
    ExpectedToken {
        expected: &'static str,
        line: usize,
        column: usize,
    },

    /// A tag or attribute name was empty.
    #[error("empty {what} name at line {line}, column {column}")]
    EmptyName {
        what: &'static str,
        line: usize,
        column: usize,
    },

    /// Attribute values must be wrapped in `"` or `'`.
    #[error("expected quoted attribute value at line {line}, column {column}")]
    UnquotedAttributeValue { line: usize, column: usize },

    /// The closing quote of an attribute value is missing.
    #[error("unclosed attribute value at line {line}, column {column}")]
    UnclosedAttributeValue { line: usize, column: usize },

    /// A closing tag names a different element than the one it closes.
    #[error(
        "mismatched closing tag: expected </{expected}> but found </{found}> at line {line}, column {column}"
    )]
    MismatchedClosingTag {
        expected: String,
        found: String,
        line: usize,
        column: usize,
    },

    /// The root element is not `<App>`.
    #[error("root element must be <App>, found <{found}>")]
    InvalidRoot { found: String },

    /// Elements are nested deeper than the parser accepts.
    #[error("elements nested deeper than {max} levels at line {line}, column {column}")]
    TooDeep {
        max: usize,
        line: usize,
        column: usize,
    },

    /// Non-whitespace input follows the root element.
    #[error("unexpected content after root element at line {line}, column {column}")]
    TrailingContent { line: usize, column: usize },

    /// A whitelist check failed in strict mode.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type for TXML parsing.
pub type Result<T> = std::result::Result<T, TxmlParseError>;
