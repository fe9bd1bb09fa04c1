//! Color values and hex string serialization.

use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An immutable RGBA color value as read from a theme defaults table.
///
/// Channels are stored as 8-bit values. The normalized `[0, 1]` float form
/// used by the contrast metric is available through [Color::components].
/// Colors have no identity beyond their value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = fully opaque).
    pub a: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Color = Color::from_rgb8(0, 0, 0);
    /// Pure white.
    pub const WHITE: Color = Color::from_rgb8(255, 255, 255);
    /// Mid-gray (128, 128, 128).
    pub const GRAY: Color = Color::from_rgb8(128, 128, 128);

    /// Create a fully opaque color from 8-bit RGB channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from 8-bit RGBA channels.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the RGB channels normalized to `[0, 1]` floats.
    /// Alpha is not part of the normalized form.
    pub fn components(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Whether the color is a shade of gray (red == green == blue).
    pub fn is_grayscale(&self) -> bool {
        self.r == self.g && self.r == self.b
    }

    /// Format the color as a hex string (`#rrggbb`, or `#rrggbbaa` if
    /// the color is not fully opaque).
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Parse a color from a `#rrggbb` or `#rrggbbaa` hex string.
    /// The leading `#` is optional.
    pub fn parse_hex(hex: &str) -> Result<Self, String> {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid hex color")?;
            let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid hex color")?;
            let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid hex color")?;
            Ok(Color::from_rgb8(r, g, b))
        } else if hex.len() == 8 {
            let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid hex color")?;
            let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid hex color")?;
            let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid hex color")?;
            let a = u8::from_str_radix(&hex[6..8], 16).map_err(|_| "Invalid hex color")?;
            Ok(Color::from_rgba8(r, g, b, a))
        } else {
            Err("Hex color must be 6 or 8 characters".to_string())
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (r={}, g={}, b={}, a={})",
            self.to_hex(),
            self.r,
            self.g,
            self.b,
            self.a
        )
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        Color::parse_hex(&hex).map_err(DeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_rgb() {
        let color = Color::parse_hex("#3875d7").unwrap();
        assert_eq!(color, Color::from_rgb8(0x38, 0x75, 0xd7));
        assert_eq!(color.a, 255);
    }

    #[test]
    fn test_parse_hex_rgba_and_without_hash() {
        let color = Color::parse_hex("00000080").unwrap();
        assert_eq!(color, Color::from_rgba8(0, 0, 0, 0x80));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(Color::parse_hex("#12345").is_err());
        assert!(Color::parse_hex("#gghhii").is_err());
    }

    #[test]
    fn test_to_hex_omits_opaque_alpha() {
        assert_eq!(Color::from_rgb8(56, 117, 215).to_hex(), "#3875d7");
        assert_eq!(Color::from_rgba8(0, 0, 0, 128).to_hex(), "#00000080");
    }

    #[test]
    fn test_components_are_normalized() {
        let components = Color::WHITE.components();
        assert_eq!(components, [1.0, 1.0, 1.0]);
        let components = Color::BLACK.components();
        assert_eq!(components, [0.0, 0.0, 0.0]);
        let components = Color::GRAY.components();
        for channel in components {
            assert!((channel - 128.0 / 255.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_grayscale_detection() {
        assert!(Color::GRAY.is_grayscale());
        assert!(Color::from_rgb8(200, 200, 200).is_grayscale());
        assert!(!Color::from_rgb8(100, 150, 200).is_grayscale());
    }
}
