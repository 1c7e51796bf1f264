//! Application state management and view model computation.
//!
//! [`AppState`] is the single container the plugin shim holds. It separates
//! the store-owned data (contacts, display mode) from view-level state (search
//! term, selection, focus) and the derived filter result.
//!
//! # State Components
//!
//! - **Store**: contacts and display mode, changed only through dispatch
//! - **Search query**: transient text typed into the search field
//! - **Filtered view**: memoized subset of contacts matching the query
//! - **Selection**: cursor within the filtered view
//! - **Input mode**: which part of the UI receives keys
//! - **Themes**: light and dark palettes; the display mode picks one
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns a state snapshot into a [`UIViewModel`] sized for
//! the pane, windowing the list around the selection.

use super::filter::{name_match_ranges, FilteredView};
use super::modes::{DisplayMode, InputMode};
use crate::domain::{Contact, ContactId, IdGenerator};
use crate::store::{Store, StoreAction};
use crate::ui::theme::{Theme, ThemeSet};
use crate::ui::viewmodel::{
    ControlsInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, PromptInfo, SearchBarInfo,
    UIViewModel,
};

/// Rows taken by everything except the contact list.
const CHROME_ROWS: usize = 11;

/// Names longer than this many characters are truncated in the list.
const MAX_NAME_CHARS: usize = 32;

/// Columns of a list row outside the name and phone: the leading space and
/// `" - "`.
const ROW_SEPARATOR_COLS: usize = 4;

/// Cuts `text` to at most `width` characters, ending in `...` when there is
/// room for it. Returns the text and how many of its original characters
/// are still shown.
fn fit_to_width(text: &str, width: usize) -> (String, usize) {
    let count = text.chars().count();
    if count <= width {
        return (text.to_string(), count);
    }

    let kept = if width > 3 { width - 3 } else { width };
    let mut out: String = text.chars().take(kept).collect();
    if width > 3 {
        out.push_str("...");
    }
    (out, kept)
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Contacts and display mode.
    pub store: Store,

    /// Source of ids for new contacts.
    pub ids: IdGenerator,

    /// Current search term. Only user input changes it.
    pub search_query: String,

    /// Contacts matching `search_query`, refreshed by `apply_search_filter()`.
    pub filtered: FilteredView,

    /// Zero-based index of the selected row within the filtered view.
    ///
    /// Clamped by `apply_search_filter()`, wraps during navigation.
    pub selected_index: usize,

    /// Current focus.
    pub input_mode: InputMode,

    /// Light and dark palettes.
    pub themes: ThemeSet,
}

impl AppState {
    /// Creates application state around a store.
    ///
    /// Focus starts on the search field and the filter is computed right away.
    #[must_use]
    pub fn new(store: Store, themes: ThemeSet) -> Self {
        let ids = IdGenerator::seeded_from(&store.state().contacts);
        let mut state = Self {
            store,
            ids,
            search_query: String::new(),
            filtered: FilteredView::default(),
            selected_index: 0,
            input_mode: InputMode::Search,
            themes,
        };
        state.apply_search_filter();
        state
    }

    /// Dispatches a store action and refreshes derived state.
    ///
    /// Returns `true` if the store changed.
    pub fn dispatch(&mut self, action: StoreAction) -> bool {
        if let StoreAction::AddContact(contact) = &action {
            self.ids.observe(contact.id);
        }

        let changed = self.store.dispatch(action);
        if changed {
            self.apply_search_filter();
        }
        changed
    }

    /// Contacts in store order.
    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        &self.store.state().contacts
    }

    /// Contacts currently visible.
    #[must_use]
    pub fn filtered_contacts(&self) -> &[Contact] {
        self.filtered.contacts()
    }

    #[must_use]
    pub fn find_contact(&self, id: ContactId) -> Option<&Contact> {
        self.contacts().iter().find(|c| c.id == id)
    }

    #[must_use]
    pub const fn display_mode(&self) -> DisplayMode {
        self.store.state().display_mode()
    }

    /// Palette for the current display mode.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        self.themes.for_mode(self.display_mode())
    }

    /// Moves the selection down one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered.len();
    }

    /// Moves the selection up one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_contact(&self) -> Option<&Contact> {
        self.filtered.contacts().get(self.selected_index)
    }

    /// Recomputes the filtered view if the contacts or the query changed, then
    /// clamps the selection into range.
    pub fn apply_search_filter(&mut self) {
        self.filtered.refresh(
            self.store.revision(),
            &self.store.state().contacts,
            &self.search_query,
        );

        if self.filtered.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered.len() - 1);
        }
    }

    /// Computes a renderable view model for a pane of `rows` × `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let mode = self.display_mode();
        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);
        let visible = self.filtered.contacts();

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(visible.len());
        if visible_end - visible_start < available_rows && visible.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items = visible[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, contact)| self.compute_display_item(contact, visible_start + offset, cols))
            .collect();

        UIViewModel {
            root_class: mode.root_class(),
            header: self.compute_header(),
            search_bar: SearchBarInfo {
                query: self.search_query.clone(),
                placeholder: "Search...",
                is_focused: self.input_mode == InputMode::Search,
            },
            controls: ControlsInfo {
                add_label: "Add Contact",
                theme_toggle_label: mode.toggle_label(),
                is_focused: self.input_mode == InputMode::Normal,
            },
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            empty_state: self.compute_empty_state(),
            prompt: self.compute_prompt(),
            footer: self.compute_footer(),
        }
    }

    fn compute_display_item(&self, contact: &Contact, absolute_idx: usize, cols: usize) -> DisplayItem {
        let name_width = MAX_NAME_CHARS.min(cols.saturating_sub(ROW_SEPARATOR_COLS));
        let (name, visible_chars) = fit_to_width(&contact.name, name_width);

        let highlight_ranges = name_match_ranges(&contact.name, &self.search_query)
            .into_iter()
            .filter(|(start, _)| *start < visible_chars)
            .map(|(start, end)| (start, end.min(visible_chars)))
            .collect();

        let phone_width = cols.saturating_sub(ROW_SEPARATOR_COLS + name.chars().count());
        let (phone_number, _) = fit_to_width(&contact.phone_number, phone_width);

        DisplayItem {
            id: contact.id,
            name,
            phone_number,
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let shown = self.filtered.len();
        let total = self.contacts().len();
        let title = if self.search_query.is_empty() {
            format!(" Contacts ({total}) ")
        } else {
            format!(" Contacts ({shown} of {total}) ")
        };
        HeaderInfo { title }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.filtered.is_empty() {
            return None;
        }

        Some(if self.contacts().is_empty() {
            EmptyState {
                message: "No contacts yet".to_string(),
                subtitle: "Press a to add one".to_string(),
            }
        } else {
            EmptyState {
                message: "No matching contacts".to_string(),
                subtitle: format!("Nothing matches \"{}\"", self.search_query),
            }
        })
    }

    fn compute_prompt(&self) -> Option<PromptInfo> {
        match &self.input_mode {
            InputMode::Prompt(dialog) => Some(PromptInfo {
                title: dialog.title(),
                label: dialog.label(),
                input: dialog.input().to_string(),
            }),
            _ => None,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search => {
                "Type to search  Esc/Tab: list  Ctrl+a: add  Ctrl+t: theme  Ctrl+n/p: navigate"
            }
            InputMode::Normal => {
                "j/k: navigate  /: search  a: add  e: edit  d: delete  t: theme  q: quit"
            }
            InputMode::Prompt(_) => "Enter: confirm  Esc: cancel  Ctrl+u: clear",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
