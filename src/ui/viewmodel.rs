//! View model types representing renderable UI state.
//!
//! Built by [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and consumed by the renderer. They carry display-ready data only: labels
//! are final, names are truncated and highlight ranges are precomputed.

use crate::domain::ContactId;

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// `"app"` in light mode, `"app dark-mode"` in dark mode.
    pub root_class: &'static str,

    pub header: HeaderInfo,

    pub search_bar: SearchBarInfo,

    /// "Add Contact" and the theme toggle.
    pub controls: ControlsInfo,

    /// Visible window of the filtered list.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    /// Shown instead of the list when nothing is visible.
    pub empty_state: Option<EmptyState>,

    /// Open add/edit dialog, drawn over the list.
    pub prompt: Option<PromptInfo>,

    pub footer: FooterInfo,
}

/// One row of the contact list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub id: ContactId,

    /// Name, truncated to fit the name column.
    pub name: String,

    pub phone_number: String,

    pub is_selected: bool,

    /// Character ranges of `name` matching the search term.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding hints for the current focus.
    pub keybindings: String,
}

/// Message shown when the list is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// The search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Shown while `query` is empty.
    pub placeholder: &'static str,
    pub is_focused: bool,
}

/// The control bar between the search input and the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlsInfo {
    pub add_label: &'static str,
    /// Names the mode the toggle switches to.
    pub theme_toggle_label: &'static str,
    /// Set while the list has focus and the control keys are live.
    pub is_focused: bool,
}

/// An open add/edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptInfo {
    pub title: &'static str,
    /// Label of the field being edited.
    pub label: &'static str,
    /// Current contents of that field.
    pub input: String,
}
