//! Contacts: a Zellij plugin for keeping a searchable list of names and
//! phone numbers.
//!
//! The plugin holds an in-memory contact list seeded with two entries. Users
//! filter it with a live search field, add and edit contacts through a modal
//! dialog, delete them from the list, and switch between a light and a dark
//! palette. Nothing is persisted.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Key mapping
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Focus, dialog,
//! │  - Event handling                                   │    search filter
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐   ┌─────────────────────────┐
//! │ Store (store/)        │   │ UI Layer (ui/)          │
//! │ - Actions             │   │ - Components            │
//! │ - Pure reducer        │   │ - Light/dark palettes   │
//! │ - Dispatch queue      │   │                         │
//! └───────────────────────┘   └─────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Contact model, ids, errors (domain/)             │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OTLP-JSON trace file                             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zellij-contacts.wasm" {
//!         light_theme "catppuccin-latte"
//!         dark_theme "catppuccin-macchiato"
//!         dark_theme_file "~/.config/zellij/contacts-dark.toml"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use zellij_contacts::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for c in "jane".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! assert_eq!(state.filtered_contacts().len(), 1);
//! # Ok::<(), zellij_contacts::ContactsError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod store;
pub mod ui;

pub use app::{handle_event, Action, AppState, DisplayMode, Event, InputMode};
pub use domain::{Contact, ContactId, ContactsError, Result};
pub use store::{Store, StoreAction, StoreState};
pub use ui::{Theme, ThemeSet};

use std::collections::BTreeMap;

const DEFAULT_LIGHT_THEME: &str = "catppuccin-latte";
const DEFAULT_DARK_THEME: &str = "catppuccin-mocha";
const DEFAULT_TRACE_LEVEL: &str = "info";

/// Plugin configuration parsed from the Zellij layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in palette for light mode.
    pub light_theme: String,

    /// Built-in palette for dark mode.
    pub dark_theme: String,

    /// TOML palette for light mode. Takes precedence over `light_theme`.
    pub light_theme_file: Option<String>,

    /// TOML palette for dark mode. Takes precedence over `dark_theme`.
    pub dark_theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans.
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            light_theme: DEFAULT_LIGHT_THEME.to_string(),
            dark_theme: DEFAULT_DARK_THEME.to_string(),
            light_theme_file: None,
            dark_theme_file: None,
            trace_level: DEFAULT_TRACE_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Parses the map Zellij passes to `load`. Missing or blank keys keep
    /// their defaults.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use zellij_contacts::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("dark_theme".to_string(), "catppuccin-frappe".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.dark_theme, "catppuccin-frappe");
    /// assert_eq!(config.light_theme, "catppuccin-latte");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };
        let defaults = Self::default();

        Self {
            light_theme: value("light_theme").unwrap_or(defaults.light_theme),
            dark_theme: value("dark_theme").unwrap_or(defaults.dark_theme),
            light_theme_file: value("light_theme_file"),
            dark_theme_file: value("dark_theme_file"),
            trace_level: value("trace_level").unwrap_or(defaults.trace_level),
        }
    }
}

/// Loads the palette for one display mode. A file wins over a name.
///
/// # Errors
///
/// [`ContactsError::Theme`] if the file cannot be loaded,
/// [`ContactsError::Config`] if the name is not a built-in theme.
pub fn resolve_theme(name: &str, file: Option<&str>) -> Result<Theme> {
    match file {
        Some(file) => Theme::from_file(infrastructure::expand_tilde(file)),
        None => Theme::from_name(name)
            .ok_or_else(|| ContactsError::Config(format!("unknown theme: {name}"))),
    }
}

fn resolve_theme_or(name: &str, file: Option<&str>, fallback: &str) -> Theme {
    resolve_theme(name, file).unwrap_or_else(|e| {
        tracing::debug!(theme_name = %name, theme_file = ?file, error = %e, fallback, "failed to load theme, using default");
        Theme::from_name(fallback).unwrap_or_default()
    })
}

/// Builds the initial application state: seed contacts, light mode, search
/// focused, palettes from `config`.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize").entered();

    let themes = ThemeSet::new(
        resolve_theme_or(
            &config.light_theme,
            config.light_theme_file.as_deref(),
            DEFAULT_LIGHT_THEME,
        ),
        resolve_theme_or(
            &config.dark_theme,
            config.dark_theme_file.as_deref(),
            DEFAULT_DARK_THEME,
        ),
    );
    tracing::debug!(light = %themes.light.name, dark = %themes.dark.name, "themes resolved");

    AppState::new(Store::default(), themes)
}
