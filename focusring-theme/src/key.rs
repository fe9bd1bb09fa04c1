//! # Color Keys
//!
//! This module provides the [ColorKey] identifier used to look up color
//! defaults in a theme. A key consists of a namespace (the component the
//! default belongs to, e.g. `Table`) and an id (the default's name within
//! that component, e.g. `selectionBackground`), mirroring the dotted key
//! convention of desktop toolkit defaults registries.
//!
//! ## Usage Examples
//!
//! ```rust
//! use focusring_theme::key::ColorKey;
//!
//! let key = ColorKey::new("Table", "selectionBackground");
//! assert_eq!(key.namespace(), "Table");
//! assert_eq!(key.id(), "selectionBackground");
//! assert_eq!(key.to_string(), "Table.selectionBackground");
//!
//! // Parse back from the dotted form
//! let parsed: ColorKey = "Table.selectionBackground".parse().unwrap();
//! assert_eq!(parsed, key);
//! ```
//!
//! The three keys the contrast check reads have dedicated constructors:
//! [ColorKey::selection_background], [ColorKey::focus_color] and
//! [ColorKey::focus_cell_border].

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// An identifier for a color default in the theming system.
///
/// Keys are value types: two keys with the same namespace and id are equal
/// and hash identically, so they can be used in maps.
///
/// # Examples
///
/// ```rust
/// use focusring_theme::key::ColorKey;
///
/// let background = ColorKey::new("Table", "background");
/// let selection = ColorKey::selection_background();
/// assert_ne!(background, selection);
/// ```
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct ColorKey {
    namespace: String,
    id: String,
}

impl ColorKey {
    /// Create a new color key from a namespace and an id.
    pub fn new(namespace: impl ToString, id: impl ToString) -> Self {
        Self {
            namespace: namespace.to_string(),
            id: id.to_string(),
        }
    }

    /// The selection background fill of a grid component.
    pub fn selection_background() -> Self {
        Self::new("Table", "selectionBackground")
    }

    /// The toolkit's baseline focus indicator color.
    pub fn focus_color() -> Self {
        Self::new("Focus", "color")
    }

    /// The border color actually rendered around the focused cell.
    pub fn focus_cell_border() -> Self {
        Self::new("Table", "focusCellHighlightBorder")
    }

    /// Returns the namespace of the key.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the id of the key within its namespace.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Display for ColorKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.namespace, self.id)
    }
}

impl FromStr for ColorKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some((namespace, id)) if !namespace.is_empty() && !id.is_empty() => {
                Ok(Self::new(namespace, id))
            },
            _ => Err(format!(
                "Color key must have the form 'Namespace.id', got '{s}'"
            )),
        }
    }
}
