//! # Built-in Themes
//!
//! This module provides the built-in theme defaults tables:
//!
//! - **[aqua::AquaTheme]**: light defaults modeled on the macOS grid
//!   selection and focus colors
//! - **[dark::DarkTheme]**: high-contrast dark defaults
//!
//! Both themes define the three defaults the contrast check reads
//! (selection background, baseline focus color, focused-cell border) plus
//! a handful of companion table colors.
//!
//! ## Usage Examples
//!
//! ```rust
//! use focusring_theme::defaults::ThemeDefaults;
//! use focusring_theme::key::ColorKey;
//! use focusring_theme::theme::aqua::AquaTheme;
//!
//! let theme = AquaTheme::new();
//! let background = theme.color(&ColorKey::selection_background()).unwrap();
//! ```

/// The Aqua theme.
pub mod aqua;
/// The Dark theme.
pub mod dark;
