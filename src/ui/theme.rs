//! Palettes and ANSI escape sequence generation.
//!
//! The contact manager has two display modes, so themes come in pairs: a
//! [`ThemeSet`] holds the light and the dark palette and the current
//! [`DisplayMode`] picks one. Palettes are either built in (Catppuccin
//! variants) or loaded from TOML files.
//!
//! # Built-in Themes
//!
//! - `catppuccin-latte`: light palette (default light)
//! - `catppuccin-mocha`: dark palette (default dark)
//! - `catppuccin-frappe`: cool dark palette
//! - `catppuccin-macchiato`: warm dark palette
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! background = "#1e1e2e"
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! control_fg = "#89b4fa"
//! danger_fg = "#f38ba8"
//! ```
//!
//! # Example
//!
//! ```rust
//! use zellij_contacts::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! let line = format!("{}{}Contacts{}", theme.base(), Theme::bold(), theme.restore());
//! assert!(line.contains("Contacts"));
//! ```

use crate::app::modes::DisplayMode;
use crate::domain::{ContactsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A named palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. "#cdd6f4").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Pane background, painted behind everything.
    pub background: String,

    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, placeholder and other secondary text.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// "Add Contact", "Edit" and the theme toggle.
    pub control_fg: String,
    /// "Delete".
    pub danger_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ContactsError::Theme`] if the file cannot be read or does not
    /// parse as a theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ContactsError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents).map_err(|e| {
            ContactsError::Theme(format!("failed to parse {}: {e}", path.display()))
        })
    }

    /// Converts a hex color to RGB. Malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground sequence for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background sequence for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Normal text on the pane background.
    #[must_use]
    pub fn base(&self) -> String {
        format!(
            "{}{}",
            Self::bg(&self.colors.background),
            Self::fg(&self.colors.text_normal)
        )
    }

    /// Clears styling and returns to [`Theme::base`].
    ///
    /// Components end every styled run with this instead of a bare reset so
    /// the background never falls back to the terminal default.
    #[must_use]
    pub fn restore(&self) -> String {
        format!("{}{}", Self::reset(), self.base())
    }
}

impl Default for Theme {
    /// Catppuccin Latte, the light palette.
    ///
    /// # Panics
    ///
    /// Panics if the bundled theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-latte")
            .expect("built-in catppuccin-latte theme should always parse")
    }
}

/// The palette pair the display mode chooses from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSet {
    pub light: Theme,
    pub dark: Theme,
}

impl ThemeSet {
    #[must_use]
    pub const fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// Palette for `mode`.
    #[must_use]
    pub const fn for_mode(&self, mode: DisplayMode) -> &Theme {
        match mode {
            DisplayMode::Light => &self.light,
            DisplayMode::Dark => &self.dark,
        }
    }
}

impl Default for ThemeSet {
    /// Latte for light mode, Mocha for dark mode.
    ///
    /// # Panics
    ///
    /// Panics if a bundled theme fails to parse, which the tests rule out.
    fn default() -> Self {
        let dark = Theme::from_name("catppuccin-mocha")
            .expect("built-in catppuccin-mocha theme should always parse");
        Self::new(Theme::default(), dark)
    }
}
