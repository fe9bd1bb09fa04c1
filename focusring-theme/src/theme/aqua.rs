use crate::color::Color;
use crate::defaults::{DefaultsTable, ThemeDefaults};
use crate::key::ColorKey;

/// Light theme defaults modeled on the macOS table selection and focus
/// colors.
///
/// The focused-cell border is deliberately brighter than the toolkit's
/// baseline focus color so the ring stays visible on the blue selection
/// fill.
#[derive(Debug, Clone)]
pub struct AquaTheme {
    table: DefaultsTable,
}

impl AquaTheme {
    /// Create a new Aqua theme.
    pub fn new() -> Self {
        let mut theme = Self {
            table: DefaultsTable::new("aqua"),
        };
        theme.setup_defaults();
        theme
    }

    fn setup_defaults(&mut self) {
        self.table.set(
            ColorKey::selection_background(),
            Color::from_rgb8(56, 117, 215),
        );
        self.table
            .set(ColorKey::focus_color(), Color::from_rgb8(94, 158, 214));
        self.table.set(
            ColorKey::focus_cell_border(),
            Color::from_rgb8(139, 199, 255),
        );

        self.table
            .set(ColorKey::new("Table", "background"), Color::WHITE);
        self.table
            .set(ColorKey::new("Table", "foreground"), Color::BLACK);
        self.table
            .set(ColorKey::new("Table", "selectionForeground"), Color::WHITE);
        self.table.set(
            ColorKey::new("Table", "gridColor"),
            Color::from_rgb8(204, 204, 204),
        );
    }
}

impl Default for AquaTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeDefaults for AquaTheme {
    fn name(&self) -> &str {
        self.table.name()
    }

    fn color(&self, key: &ColorKey) -> Option<Color> {
        self.table.color(key)
    }
}
