//! # Theme Defaults
//!
//! This module provides the [ThemeDefaults] trait, the seam between the
//! contrast checker and whatever supplies theme colors, together with
//! [DefaultsTable], a concrete map-backed implementation.
//!
//! ## Overview
//!
//! - **[ThemeDefaults]**: resolve a [ColorKey] to an optional [Color]
//! - **[DefaultsTable]**: an `IndexMap`-backed defaults registry used by
//!   the built-in themes and by theme files loaded from disk
//!
//! The checker only ever talks to `&dyn ThemeDefaults`, so it can be run
//! against synthetic tables in tests without any GUI runtime.
//!
//! ## Usage Examples
//!
//! ```rust
//! use focusring_theme::color::Color;
//! use focusring_theme::defaults::{DefaultsTable, ThemeDefaults};
//! use focusring_theme::key::ColorKey;
//!
//! let table = DefaultsTable::new("custom")
//!     .with(ColorKey::selection_background(), Color::from_rgb8(56, 117, 215))
//!     .with(ColorKey::focus_color(), Color::from_rgb8(94, 158, 214));
//!
//! assert_eq!(table.name(), "custom");
//! assert!(table.color(&ColorKey::selection_background()).is_some());
//! assert!(table.color(&ColorKey::focus_cell_border()).is_none());
//! ```

use indexmap::IndexMap;

use crate::color::Color;
use crate::key::ColorKey;

/// A source of theme color defaults.
///
/// Implementations map named [ColorKey]s to [Color] values. A key the
/// theme does not define resolves to [None]; callers decide whether that
/// is an error.
pub trait ThemeDefaults: std::fmt::Debug {
    /// The human-readable name of the theme, used in diagnostics.
    fn name(&self) -> &str;

    /// Resolve a color default, or [None] if the theme does not define it.
    fn color(&self, key: &ColorKey) -> Option<Color>;
}

/// A concrete defaults registry backed by an [IndexMap].
///
/// Insertion order is preserved, so diagnostics listing a theme's keys
/// come out in the order the theme defined them.
#[derive(Debug, Clone, Default)]
pub struct DefaultsTable {
    name: String,
    colors: IndexMap<ColorKey, Color>,
}

impl DefaultsTable {
    /// Create an empty defaults table with the given theme name.
    pub fn new(name: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            colors: IndexMap::new(),
        }
    }

    /// Insert a color default, replacing any previous value for the key.
    pub fn set(&mut self, key: ColorKey, color: Color) {
        self.colors.insert(key, color);
    }

    /// Builder-style variant of [DefaultsTable::set].
    pub fn with(mut self, key: ColorKey, color: Color) -> Self {
        self.set(key, color);
        self
    }

    /// The number of defaults in the table.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the table defines no defaults.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate over the defined keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &ColorKey> {
        self.colors.keys()
    }
}

impl ThemeDefaults for DefaultsTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self, key: &ColorKey) -> Option<Color> {
        self.colors.get(key).copied()
    }
}
