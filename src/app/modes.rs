//! Focus and display mode state types.
//!
//! # State Machines
//!
//! Input focus is one of:
//! - **Search**: the search field has focus (initial state)
//! - **Normal**: the contact list and its controls have focus
//! - **Prompt**: a modal dialog is collecting a name and phone number
//!
//! Display mode is a two-state toggle, `Light ⇄ Dark`, starting at `Light`.
//! It has no terminal state and only changes through the store's
//! `ToggleTheme` action.

use super::prompt::PromptDialog;

/// Which part of the UI receives key presses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// List navigation and control keys (add, edit, delete, theme, quit).
    Normal,

    /// Printable keys edit the search term.
    ///
    /// The plugin starts here so the search field is focused on first display.
    Search,

    /// A modal dialog owns all input until it is confirmed or cancelled.
    Prompt(PromptDialog),
}

impl InputMode {
    #[must_use]
    pub const fn is_prompt(&self) -> bool {
        matches!(self, Self::Prompt(_))
    }
}

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    /// Maps the store's `is_dark_mode` flag to a mode.
    #[must_use]
    pub const fn from_dark_flag(is_dark_mode: bool) -> Self {
        if is_dark_mode {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The mode a toggle would switch to.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label of the theme toggle control, naming the mode it switches to.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self.toggled() {
            Self::Dark => "Switch to Dark Mode",
            Self::Light => "Switch to Light Mode",
        }
    }

    /// Style class of the root container.
    #[must_use]
    pub const fn root_class(self) -> &'static str {
        match self {
            Self::Light => "app",
            Self::Dark => "app dark-mode",
        }
    }
}
