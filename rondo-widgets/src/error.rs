//! # Widget Error Types
//!
//! Error types for widget configuration and resource lookup.

use std::path::PathBuf;

use thiserror::Error;

use rondo_style::error::StyleError;

/// Errors that can occur while configuring widgets.
#[derive(Error, Debug)]
pub enum WidgetError {
    /// A configuration file was not found or could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Inline configuration text failed to parse.
    #[error("Failed to parse button config: {details}")]
    ConfigParse {
        /// Details about the parse error.
        details: String,
    },

    /// A configuration file failed to parse.
    #[error("Failed to parse config file {path:?}: {details}")]
    ConfigFileParse {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// A color value inside a configuration was invalid.
    #[error(transparent)]
    Color(#[from] StyleError),

    /// A named color table was not found in the catalog.
    #[error("No color table named '{name}'")]
    UnknownColorTable {
        /// The name that was looked up.
        name: String,
    },
}

/// Result type alias for widget operations.
pub type WidgetResult<T> = Result<T, WidgetError>;

impl WidgetError {
    /// Create a parse error for inline configuration text.
    pub fn config_parse(details: impl Into<String>) -> Self {
        Self::ConfigParse {
            details: details.into(),
        }
    }

    /// Create a parse error for a configuration file.
    pub fn config_file_parse(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::ConfigFileParse {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create an unknown color table error.
    pub fn unknown_color_table(name: impl Into<String>) -> Self {
        Self::UnknownColorTable { name: name.into() }
    }
}
