//! # Style Error Types
//!
//! Error types for color parsing and styling operations, with
//! context-rich messages instead of generic strings.

use thiserror::Error;

/// Errors that can occur while building styles.
#[derive(Error, Debug)]
pub enum StyleError {
    /// A color string could not be parsed.
    #[error("Invalid color '{value}': {details}")]
    InvalidColor {
        /// The string that failed to parse.
        value: String,
        /// Details about the parse failure.
        details: String,
    },
}

/// Result type alias for styling operations.
pub type StyleResult<T> = Result<T, StyleError>;

impl StyleError {
    /// Create an invalid color error.
    pub fn invalid_color(value: impl Into<String>, details: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
            details: details.into(),
        }
    }
}
