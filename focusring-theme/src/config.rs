//! # Theme Configuration System
//!
//! This module provides theme configuration that allows selecting the
//! checked theme through environment variables, theme files, and
//! programmatic configuration.
//!
//! ## Overview
//!
//! - **[ThemeConfig]**: Main configuration structure for theme selection
//! - **[ThemeSource]**: Enum for the different theme sources
//! - **Environment Variable Support**: Select the theme via `FOCUSRING_THEME`
//! - **Theme File Support**: Load a defaults table from a TOML file
//!
//! ## Usage Examples
//!
//! ### Environment Variable Configuration
//!
//! ```bash
//! export FOCUSRING_THEME=aqua
//! export FOCUSRING_THEME=dark
//! export FOCUSRING_THEME=file:./themes/custom.toml
//! export FOCUSRING_THEME_FALLBACK=dark
//! ```
//!
//! ### Programmatic Configuration
//!
//! ```rust
//! use focusring_theme::config::{ThemeConfig, ThemeSource};
//!
//! let config = ThemeConfig::new()
//!     .with_default_theme(ThemeSource::Dark)
//!     .with_fallback_theme(ThemeSource::Aqua);
//!
//! let theme = config.resolve().unwrap();
//! ```
//!
//! ## Theme File Format
//!
//! Theme files are TOML with a `name` and a `[colors]` table mapping
//! dotted color keys to hex color strings:
//!
//! ```toml
//! name = "custom"
//!
//! [colors]
//! "Table.selectionBackground" = "#3875d7"
//! "Focus.color" = "#5e9ed6"
//! "Table.focusCellHighlightBorder" = "#8bc7ff"
//! ```

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::Color;
use crate::defaults::{DefaultsTable, ThemeDefaults};
use crate::error::{ThemeError, ThemeResult};
use crate::key::ColorKey;
use crate::theme::{aqua::AquaTheme, dark::DarkTheme};

/// Environment variable selecting the checked theme.
pub const THEME_ENV_VAR: &str = "FOCUSRING_THEME";
/// Environment variable selecting the fallback theme.
pub const THEME_FALLBACK_ENV_VAR: &str = "FOCUSRING_THEME_FALLBACK";

/// A source for theme defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    /// The built-in Aqua theme.
    Aqua,
    /// The built-in dark theme.
    Dark,
    /// A theme loaded from a TOML file.
    File(PathBuf),
    /// A theme referenced by a name that is not a built-in. Resolution
    /// always fails with [ThemeError::ThemeNotFound]; the name is kept
    /// for the error message.
    Named(String),
}

impl ThemeSource {
    /// Parse a theme source from its environment variable form
    /// (`aqua`, `dark` or `file:<path>`).
    ///
    /// Any other value becomes [ThemeSource::Named], which fails at
    /// resolution time rather than being silently replaced.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "aqua" => Self::Aqua,
            "dark" => Self::Dark,
            other => match other.strip_prefix("file:") {
                Some(path) => Self::File(PathBuf::from(path)),
                None => Self::Named(other.to_string()),
            },
        }
    }
}

/// A theme configuration resolving a [ThemeSource] into theme defaults.
///
/// Resolution tries the default source first; if loading it fails and a
/// fallback is configured, the fallback is tried before giving up.
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// The default theme source.
    pub default_theme: ThemeSource,
    /// The fallback theme source.
    pub fallback_theme: Option<ThemeSource>,
}

/// Serde form of a TOML theme file.
#[derive(Debug, Deserialize)]
struct ThemeFile {
    name: String,
    colors: HashMap<String, Color>,
}

impl ThemeConfig {
    /// Create a new theme configuration with default settings
    /// (Aqua with a dark fallback).
    pub fn new() -> Self {
        Self {
            default_theme: ThemeSource::Aqua,
            fallback_theme: Some(ThemeSource::Dark),
        }
    }

    /// Create a theme configuration from environment variables or use
    /// defaults.
    ///
    /// Reads `FOCUSRING_THEME` for the default source and
    /// `FOCUSRING_THEME_FALLBACK` for the fallback. An unrecognized
    /// value is not replaced here; it fails at [ThemeConfig::resolve]
    /// with [ThemeError::ThemeNotFound].
    pub fn from_env_or_default() -> Self {
        let mut config = Self::new();

        if let Ok(value) = env::var(THEME_ENV_VAR) {
            config.default_theme = ThemeSource::parse(&value);
        }
        if let Ok(value) = env::var(THEME_FALLBACK_ENV_VAR) {
            config.fallback_theme = Some(ThemeSource::parse(&value));
        }

        config
    }

    /// Set the default theme source.
    pub fn with_default_theme(mut self, source: ThemeSource) -> Self {
        self.default_theme = source;
        self
    }

    /// Set the fallback theme source.
    pub fn with_fallback_theme(mut self, source: ThemeSource) -> Self {
        self.fallback_theme = Some(source);
        self
    }

    /// Resolve the configured theme into a defaults table.
    ///
    /// Tries the default source first, then the fallback. The error of
    /// the default source is returned if neither resolves.
    pub fn resolve(&self) -> ThemeResult<Box<dyn ThemeDefaults>> {
        match load_source(&self.default_theme) {
            Ok(theme) => Ok(theme),
            Err(err) => {
                if let Some(fallback) = &self.fallback_theme {
                    log::warn!(
                        "Failed to load theme {:?} ({err}), trying fallback {:?}",
                        self.default_theme,
                        fallback
                    );
                    if let Ok(theme) = load_source(fallback) {
                        return Ok(theme);
                    }
                }
                Err(err)
            },
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a single theme source without fallback handling.
pub fn load_source(source: &ThemeSource) -> ThemeResult<Box<dyn ThemeDefaults>> {
    match source {
        ThemeSource::Aqua => Ok(Box::new(AquaTheme::new())),
        ThemeSource::Dark => Ok(Box::new(DarkTheme::new())),
        ThemeSource::File(path) => Ok(Box::new(load_theme_file(path)?)),
        ThemeSource::Named(name) => Err(ThemeError::not_found(name)),
    }
}

/// Load a defaults table from a TOML theme file.
pub fn load_theme_file(path: &Path) -> ThemeResult<DefaultsTable> {
    if !path.exists() {
        return Err(ThemeError::file_not_found(path));
    }
    let contents = fs::read_to_string(path)?;
    let file: ThemeFile =
        toml::from_str(&contents).map_err(|err| ThemeError::parse_error(path, err.to_string()))?;

    let mut table = DefaultsTable::new(&file.name);
    for (key, color) in file.colors {
        let key: ColorKey = key
            .parse()
            .map_err(|details: String| ThemeError::parse_error(path, details))?;
        table.set(key, color);
    }
    log::debug!(
        "Loaded theme '{}' with {} colors from {:?}",
        table.name(),
        table.len(),
        path
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_theme_source() {
        assert_eq!(ThemeSource::parse("aqua"), ThemeSource::Aqua);
        assert_eq!(ThemeSource::parse("dark"), ThemeSource::Dark);
        assert_eq!(
            ThemeSource::parse("file:./themes/custom.toml"),
            ThemeSource::File(PathBuf::from("./themes/custom.toml"))
        );
        assert_eq!(
            ThemeSource::parse("neon"),
            ThemeSource::Named("neon".to_string())
        );
    }

    #[test]
    fn test_named_source_fails_with_theme_not_found() {
        let err = load_source(&ThemeSource::Named("neon".to_string())).unwrap_err();
        assert!(matches!(err, ThemeError::ThemeNotFound { .. }));
        assert_eq!(err.to_string(), "Theme 'neon' not found");
    }

    // Single env test so the variables are never touched concurrently;
    // restores a clean environment at the end.
    #[test]
    fn test_from_env_resolution() {
        env::set_var(THEME_ENV_VAR, "dark");
        env::set_var(THEME_FALLBACK_ENV_VAR, "aqua");
        let config = ThemeConfig::from_env_or_default();
        assert_eq!(config.default_theme, ThemeSource::Dark);
        assert_eq!(config.fallback_theme, Some(ThemeSource::Aqua));
        assert_eq!(config.resolve().unwrap().name(), "dark");

        // An unrecognized name is carried into resolution and the
        // configured fallback is still tried.
        env::set_var(THEME_ENV_VAR, "neon");
        let config = ThemeConfig::from_env_or_default();
        assert_eq!(
            config.default_theme,
            ThemeSource::Named("neon".to_string())
        );
        assert_eq!(config.resolve().unwrap().name(), "aqua");

        // When the fallback is unresolvable too, the default's error
        // surfaces.
        env::set_var(THEME_FALLBACK_ENV_VAR, "hologram");
        let config = ThemeConfig::from_env_or_default();
        let err = config.resolve().unwrap_err();
        assert!(matches!(err, ThemeError::ThemeNotFound { ref name } if name.as_str() == "neon"));

        env::remove_var(THEME_ENV_VAR);
        env::remove_var(THEME_FALLBACK_ENV_VAR);
    }

    #[test]
    fn test_resolve_builtin_sources() {
        let theme = ThemeConfig::new().resolve().unwrap();
        assert_eq!(theme.name(), "aqua");

        let theme = ThemeConfig::new()
            .with_default_theme(ThemeSource::Dark)
            .resolve()
            .unwrap();
        assert_eq!(theme.name(), "dark");
    }

    #[test]
    fn test_resolve_falls_back_when_default_fails() {
        let config = ThemeConfig::new()
            .with_default_theme(ThemeSource::File(PathBuf::from("/nonexistent/theme.toml")))
            .with_fallback_theme(ThemeSource::Dark);
        let theme = config.resolve().unwrap();
        assert_eq!(theme.name(), "dark");
    }

    #[test]
    fn test_resolve_reports_default_error_without_fallback() {
        let config = ThemeConfig {
            default_theme: ThemeSource::File(PathBuf::from("/nonexistent/theme.toml")),
            fallback_theme: None,
        };
        let err = config.resolve().unwrap_err();
        assert!(matches!(err, ThemeError::ThemeFileNotFound { .. }));
    }

    #[test]
    fn test_load_theme_file() {
        let test_dir = std::env::temp_dir().join("focusring_theme_file_test");
        fs::create_dir_all(&test_dir).unwrap();
        let path = test_dir.join("custom.toml");
        fs::write(
            &path,
            r##"
name = "custom"

[colors]
"Table.selectionBackground" = "#3875d7"
"Focus.color" = "#5e9ed6"
"Table.focusCellHighlightBorder" = "#8bc7ff"
"##,
        )
        .unwrap();

        let table = load_theme_file(&path).unwrap();
        assert_eq!(table.name(), "custom");
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.color(&ColorKey::selection_background()),
            Some(Color::from_rgb8(0x38, 0x75, 0xd7))
        );

        fs::remove_dir_all(&test_dir).unwrap();
    }

    #[test]
    fn test_load_theme_file_rejects_bad_keys() {
        let test_dir = std::env::temp_dir().join("focusring_theme_badkey_test");
        fs::create_dir_all(&test_dir).unwrap();
        let path = test_dir.join("bad.toml");
        fs::write(
            &path,
            r##"
name = "bad"

[colors]
"selectionBackground" = "#3875d7"
"##,
        )
        .unwrap();

        let err = load_theme_file(&path).unwrap_err();
        assert!(matches!(err, ThemeError::ThemeParseError { .. }));

        fs::remove_dir_all(&test_dir).unwrap();
    }
}
