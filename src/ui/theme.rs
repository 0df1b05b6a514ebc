//! Theme management and color resolution.
//!
//! This module defines the color scheme system for the wallet UI, supporting
//! built-in palettes and custom themes loaded from TOML files. Colors are stored
//! as hex strings and resolved into ratatui RGB colors at render time.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! background = "#11111b"
//! surface = "#1e1e2e"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! accent = "#f5c2e7"
//! border = "#45475a"
//! border_focused = "#f5c2e7"
//! card_face = "#89b4fa"
//! amount = "#a6e3a1"
//! ```

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{Result, WalletdeckError};

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. "#cdd6f4").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Screen background.
    pub background: String,
    /// Panel background (expense panel, detail surface).
    pub surface: String,
    /// Normal text.
    pub text_normal: String,
    /// Dimmed text (captions, categories, dimmed home chrome).
    pub text_dim: String,
    /// Accent (greeting, back affordance, focus marks).
    pub accent: String,
    /// Borders and separators.
    pub border: String,
    /// Border of the focused deck slot.
    pub border_focused: String,
    /// Card face color.
    pub card_face: String,
    /// Amount text color.
    pub amount: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

impl Theme {
    /// The default dark palette.
    #[must_use]
    pub fn midnight() -> Self {
        Self {
            name: "midnight".to_string(),
            colors: ThemeColors {
                background: "#11111b".to_string(),
                surface: "#1e1e2e".to_string(),
                text_normal: "#cdd6f4".to_string(),
                text_dim: "#6c7086".to_string(),
                accent: "#f5c2e7".to_string(),
                border: "#45475a".to_string(),
                border_focused: "#f5c2e7".to_string(),
                card_face: "#89b4fa".to_string(),
                amount: "#a6e3a1".to_string(),
            },
        }
    }

    /// A light palette.
    #[must_use]
    pub fn daybreak() -> Self {
        Self {
            name: "daybreak".to_string(),
            colors: ThemeColors {
                background: "#eff1f5".to_string(),
                surface: "#e6e9ef".to_string(),
                text_normal: "#4c4f69".to_string(),
                text_dim: "#8c8fa1".to_string(),
                accent: "#ea76cb".to_string(),
                border: "#bcc0cc".to_string(),
                border_focused: "#ea76cb".to_string(),
                card_face: "#1e66f5".to_string(),
                amount: "#40a02b".to_string(),
            },
        }
    }

    /// Loads a built-in theme by name.
    ///
    /// Supported names: `midnight`, `daybreak`. Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "midnight" => Some(Self::midnight()),
            "daybreak" => Some(Self::daybreak()),
            _ => None,
        }
    }

    /// Loads a custom theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            WalletdeckError::Theme(format!(
                "failed to read {}: {e}",
                path.as_ref().display()
            ))
        })?;
        let theme = toml::from_str(&contents)?;
        Ok(theme)
    }

    /// Resolves a hex color string into a ratatui color.
    ///
    /// Malformed strings fall back to the terminal's default foreground rather
    /// than failing the render.
    #[must_use]
    pub fn color(hex: &str) -> Color {
        parse_hex(hex).unwrap_or(Color::Reset)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    // Length is in bytes; non-ASCII input must be rejected before slicing.
    if !hex.is_ascii() || hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_resolve_by_name() {
        assert_eq!(Theme::from_name("midnight").map(|t| t.name), Some("midnight".to_string()));
        assert_eq!(Theme::from_name("daybreak").map(|t| t.name), Some("daybreak".to_string()));
        assert!(Theme::from_name("nonexistent").is_none());
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(Theme::color("#ff0080"), Color::Rgb(255, 0, 128));
        assert_eq!(Theme::color("not-a-color"), Color::Reset);
        assert_eq!(Theme::color("#fff"), Color::Reset);
    }

    #[test]
    fn multibyte_hex_falls_back_instead_of_panicking() {
        // Six bytes but not six ASCII digits; slicing these at byte
        // boundaries would split a character.
        assert_eq!(Theme::color("#€€"), Color::Reset);
        assert_eq!(Theme::color("#ααα"), Color::Reset);
        assert_eq!(Theme::color("#"), Color::Reset);
    }

    #[test]
    fn loads_theme_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let toml = toml::to_string(&Theme::midnight()).expect("serialize");
        file.write_all(toml.as_bytes()).expect("write");

        let theme = Theme::from_file(file.path()).expect("load");
        assert_eq!(theme.name, "midnight");
        assert_eq!(theme.colors.accent, "#f5c2e7");
    }

    #[test]
    fn missing_theme_file_is_an_error() {
        assert!(Theme::from_file("/nonexistent/theme.toml").is_err());
    }
}
