use crate::color::Color;
use crate::defaults::{DefaultsTable, ThemeDefaults};
use crate::key::ColorKey;

/// A dark theme with a high-contrast focused-cell border.
#[derive(Debug, Clone)]
pub struct DarkTheme {
    table: DefaultsTable,
}

impl DarkTheme {
    /// Create a new dark theme.
    pub fn new() -> Self {
        let mut theme = Self {
            table: DefaultsTable::new("dark"),
        };
        theme.setup_defaults();
        theme
    }

    fn setup_defaults(&mut self) {
        self.table.set(
            ColorKey::selection_background(),
            Color::from_rgb8(10, 132, 255),
        );
        self.table
            .set(ColorKey::focus_color(), Color::from_rgb8(59, 105, 177));
        self.table.set(
            ColorKey::focus_cell_border(),
            Color::from_rgb8(255, 214, 10),
        );

        self.table.set(
            ColorKey::new("Table", "background"),
            Color::from_rgb8(30, 30, 30),
        );
        self.table.set(
            ColorKey::new("Table", "foreground"),
            Color::from_rgb8(224, 224, 224),
        );
        self.table
            .set(ColorKey::new("Table", "selectionForeground"), Color::WHITE);
        self.table.set(
            ColorKey::new("Table", "gridColor"),
            Color::from_rgb8(60, 60, 60),
        );
    }
}

impl Default for DarkTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeDefaults for DarkTheme {
    fn name(&self) -> &str {
        self.table.name()
    }

    fn color(&self, key: &ColorKey) -> Option<Color> {
        self.table.color(key)
    }
}
