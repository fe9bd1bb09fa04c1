//! # Theme Error Types
//!
//! This module provides error types for theme resolution and loading,
//! with specific, context-rich error messages.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving or loading a theme.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme with the specified name was not found.
    #[error("Theme '{name}' not found")]
    ThemeNotFound {
        /// The name of the theme that was not found.
        name: String,
    },

    /// Theme file was not found on disk.
    #[error("Theme file not found: {path:?}")]
    ThemeFileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a theme file.
    #[error("Failed to parse theme file {path:?}: {details}")]
    ThemeParseError {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a theme not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ThemeNotFound { name: name.into() }
    }

    /// Create a theme file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ThemeFileNotFound { path: path.into() }
    }

    /// Create a theme parse error.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::ThemeParseError {
            path: path.into(),
            details: details.into(),
        }
    }
}
