//! # Check Error Types
//!
//! This module provides the error type for a single contrast check run.
//! Every variant is fatal: the check is a single-shot assertion with no
//! local recovery or retry.

use thiserror::Error;

use focusring_theme::error::ThemeError;
use focusring_theme::key::ColorKey;

/// Errors that can occur during a contrast check run.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The requested theme could not be resolved; the check aborts
    /// before reading any color.
    #[error("Unsupported theme: {0}")]
    UnsupportedTheme(#[from] ThemeError),

    /// A required theme color did not resolve.
    #[error("Missing theme color for '{key}'")]
    MissingColorData {
        /// The key that failed to resolve.
        key: ColorKey,
    },

    /// The contrast metric shows the focus indicator is not more visible
    /// than the baseline. This is the check's actual assertion failure.
    #[error(
        "Focus ring not visible: actual diff {actual_diff} <= baseline diff {baseline_diff}"
    )]
    FocusRingNotVisible {
        /// RGB difference between the rendered focus border and the
        /// selection background.
        actual_diff: f32,
        /// RGB difference between the baseline focus color and the
        /// selection background.
        baseline_diff: f32,
    },
}

/// Result type alias for check operations.
pub type CheckResult<T> = Result<T, CheckError>;

impl CheckError {
    /// Create a missing color data error.
    pub fn missing_color(key: ColorKey) -> Self {
        Self::MissingColorData { key }
    }
}
