//! Error types for TSS parsing and processing.

use thiserror::Error;
use txml::ValidationError;

/// Errors that can occur while parsing a TSS stylesheet.
///
/// # Examples
///
/// ```rust
/// use tss::{TssError, try_parse_tss};
/// use txml::Validator;
///
/// let err = try_parse_tss("Button { color: red }", &Validator::lenient()).unwrap_err();
/// assert!(matches!(err, TssError::InvalidSyntax { line: 1, .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TssError {
    /// The source does not follow the TSS grammar.
    #[error("TSS syntax error at line {line}, column {column}: {message}")]
    InvalidSyntax {
        message: String,
        line: usize,
        column: usize,
    },

    /// A property or color failed validation in strict mode.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Error returned when a color string is not in a supported format.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid color '{input}': {reason}")]
pub struct ColorParseError {
    pub input: String,
    pub reason: &'static str,
}

impl ColorParseError {
    pub(crate) fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// Result type for stylesheet parsing.
pub type Result<T> = std::result::Result<T, TssError>;
