#![warn(missing_docs)]

//! # Focusring Theming
//!
//! Theme color defaults and resolution for the focusring contrast checker.
//!
//! ## Overview
//!
//! This crate provides the theme side of the checker:
//!
//! - **[Color](color::Color)**: an immutable RGBA value with 8-bit channels
//!   and a normalized float form
//! - **[ColorKey](key::ColorKey)**: a namespaced identifier for a theme
//!   default
//! - **[ThemeDefaults](defaults::ThemeDefaults)**: the color-resolution
//!   seam the checker reads through
//! - **[ThemeConfig](config::ThemeConfig)**: environment- and file-driven
//!   theme selection with a fallback
//! - **Built-in Themes**: Aqua (light) and dark defaults tables
//!
//! ## Quick Start
//!
//! ```rust
//! use focusring_theme::defaults::ThemeDefaults;
//! use focusring_theme::key::ColorKey;
//! use focusring_theme::theme::aqua::AquaTheme;
//!
//! let theme = AquaTheme::new();
//! let background = theme
//!     .color(&ColorKey::selection_background())
//!     .expect("aqua defines the selection background");
//! println!("{}: {}", theme.name(), background);
//! ```
//!
//! The checker itself only ever sees `&dyn ThemeDefaults`, so any map from
//! keys to colors can stand in for a real toolkit registry — including the
//! synthetic tables used in tests.

/// Contains color values and hex serialization.
pub mod color;
/// Contains the [config::ThemeConfig] struct for theme selection.
pub mod config;
/// Contains the [defaults::ThemeDefaults] trait and [defaults::DefaultsTable].
pub mod defaults;
/// Contains theme error types.
pub mod error;
/// Contains the [key::ColorKey] struct.
pub mod key;
/// Contains the built-in themes.
pub mod theme;
