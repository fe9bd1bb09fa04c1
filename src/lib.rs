#![warn(missing_docs)]

//! Verify that a theme's focus indicator stays visible against the
//! selection background.
//!
//! The check resolves three colors from a [ThemeDefaults] source — the
//! selection background, the toolkit's baseline focus color, and the
//! border actually rendered around the focused cell — and passes only if
//! the rendered border is more distinct from the background than the
//! baseline would have been. A few named policy rules handle grayscale
//! backgrounds before the generic RGB-difference metric applies.
//!
//! ```rust
//! use focusring::check::run_check;
//! use focusring_theme::theme::aqua::AquaTheme;
//!
//! let report = run_check(&AquaTheme::new()).expect("aqua focus ring is visible");
//! println!("{report}");
//! ```
//!
//! [ThemeDefaults]: focusring_theme::defaults::ThemeDefaults

pub use focusring_theme as theme;

/// Contains the contrast check, its policy rules and report.
pub mod check;
/// Contains the [error::CheckError] type.
pub mod error;

/// A "prelude" for users of the focusring checker.
///
/// ```rust
/// use focusring::prelude::*;
/// ```
pub mod prelude {
    pub use crate::check::{rgb_diff, run_check, ContrastReport, PolicyRule};
    pub use crate::error::{CheckError, CheckResult};
    pub use focusring_theme::color::Color;
    pub use focusring_theme::config::{ThemeConfig, ThemeSource};
    pub use focusring_theme::defaults::{DefaultsTable, ThemeDefaults};
    pub use focusring_theme::key::ColorKey;
}
