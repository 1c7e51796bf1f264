//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only entry point the plugin shim calls. It applies
//! one user event to [`AppState`] to completion and reports whether the pane
//! needs a re-render plus any host side effects.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Focus**: `FocusSearch`, `FocusList`
//! - **Text input**: `Char`, `Backspace`, `ClearLine`
//! - **Dialog**: `Confirm`, `Cancel`
//! - **Contact controls**: `AddContact`, `EditContact`, `DeleteContact`, `ToggleTheme`
//! - **Host**: `CloseFocus`
//!
//! While a dialog is open only text input and dialog events have an effect.

use super::modes::InputMode;
use super::prompt::{PromptDialog, PromptOutcome, PromptStep};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{Contact, ContactId};
use crate::store::StoreAction;

/// Events produced from key presses by the plugin shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the selection down one row (wraps to top).
    KeyDown,
    /// Moves the selection up one row (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
    /// Gives focus to the search field.
    FocusSearch,
    /// Gives focus to the contact list.
    FocusList,
    /// Types a character into the focused text field.
    Char(char),
    /// Deletes the last character of the focused text field.
    Backspace,
    /// Empties the focused text field.
    ClearLine,
    /// Enter: confirms the dialog step, or leaves the search field.
    Confirm,
    /// Esc: abandons the dialog, or leaves the search field.
    Cancel,
    /// Opens the add dialog.
    AddContact,
    /// Opens the edit dialog for a contact.
    EditContact(ContactId),
    /// Deletes a contact without confirmation.
    DeleteContact(ContactId),
    /// Switches between light and dark mode.
    ToggleTheme,
}

/// Processes an event, mutates application state, and returns whether to
/// re-render along with the side effects to execute.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the shim's error path in place for
/// handlers that may fail.
///
/// # Example
///
/// ```
/// use zellij_contacts::app::{handle_event, AppState, Event};
/// use zellij_contacts::store::Store;
/// use zellij_contacts::ui::ThemeSet;
///
/// let mut state = AppState::new(Store::default(), ThemeSet::default());
/// let (should_render, actions) = handle_event(&mut state, &Event::ToggleTheme)?;
/// assert!(should_render);
/// assert!(actions.is_empty());
/// assert!(state.store.state().is_dark_mode);
/// # Ok::<(), zellij_contacts::ContactsError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if state.input_mode.is_prompt() {
        return Ok(handle_prompt_event(state, event));
    }

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::FocusSearch => {
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::FocusList | Event::Confirm | Event::Cancel => {
            if state.input_mode == InputMode::Normal {
                return Ok((false, vec![]));
            }
            tracing::debug!(query = %state.search_query, "leaving search field");
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, char = %c, "search query updated");
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search || state.search_query.pop().is_none() {
                return Ok((false, vec![]));
            }
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::ClearLine => {
            if state.search_query.is_empty() {
                return Ok((false, vec![]));
            }
            state.search_query.clear();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::AddContact => {
            tracing::debug!("opening add dialog");
            state.input_mode = InputMode::Prompt(PromptDialog::add());
            Ok((true, vec![]))
        }
        Event::EditContact(id) => Ok((begin_edit(state, *id), vec![])),
        Event::DeleteContact(id) => {
            tracing::debug!(contact_id = %id, "deleting contact");
            Ok((state.dispatch(StoreAction::DeleteContact(*id)), vec![]))
        }
        Event::ToggleTheme => {
            state.dispatch(StoreAction::ToggleTheme);
            tracing::debug!(mode = ?state.display_mode(), "display mode toggled");
            Ok((true, vec![]))
        }
    }
}

/// Opens the edit dialog for `id`. A stale id leaves everything as it was.
fn begin_edit(state: &mut AppState, id: ContactId) -> bool {
    let Some(contact) = state.find_contact(id) else {
        tracing::debug!(contact_id = %id, "edit requested for missing contact, ignoring");
        return false;
    };

    tracing::debug!(contact_id = %id, contact = %contact.label(), "opening edit dialog");
    let dialog = PromptDialog::edit(contact);
    state.input_mode = InputMode::Prompt(dialog);
    true
}

fn handle_prompt_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let InputMode::Prompt(dialog) = &mut state.input_mode else {
        return (false, vec![]);
    };

    match event {
        Event::Char(c) => dialog.push(*c),
        Event::Backspace => dialog.pop(),
        Event::ClearLine => dialog.clear(),
        Event::Cancel => {
            tracing::debug!(kind = ?dialog.kind, "dialog cancelled");
            state.input_mode = InputMode::Normal;
        }
        Event::Confirm => {
            let dialog = dialog.clone();
            match dialog.confirm() {
                PromptStep::Continue(next) => state.input_mode = InputMode::Prompt(next),
                PromptStep::Submit(outcome) => {
                    state.input_mode = InputMode::Normal;
                    submit(state, outcome);
                }
            }
        }
        _ => return (false, vec![]),
    }

    (true, vec![])
}

fn submit(state: &mut AppState, outcome: PromptOutcome) {
    match outcome {
        PromptOutcome::Add { name, phone_number } => {
            if name.is_empty() || phone_number.is_empty() {
                tracing::debug!("add abandoned, name or phone number empty");
                return;
            }
            let id = state.ids.next_id();
            tracing::debug!(contact_id = %id, "adding contact");
            state.dispatch(StoreAction::AddContact(Contact {
                id,
                name,
                phone_number,
            }));
        }
        PromptOutcome::Edit {
            id,
            name,
            phone_number,
        } => {
            tracing::debug!(contact_id = %id, "updating contact");
            state.dispatch(StoreAction::UpdateContact(Contact {
                id,
                name,
                phone_number,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use crate::ui::ThemeSet;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn state() -> AppState {
        AppState::new(Store::default(), ThemeSet::default())
    }

    fn send(state: &mut AppState, events: &[Event]) {
        for event in events {
            handle_event(state, event).unwrap();
        }
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    fn names(state: &AppState) -> Vec<String> {
        state.contacts().iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn typing_in_search_filters_the_list() {
        let mut state = state();
        type_text(&mut state, "jane");
        assert_eq!(state.filtered_contacts().len(), 1);

        for _ in 0..4 {
            send(&mut state, &[Event::Backspace]);
        }
        assert_eq!(state.search_query, "");
        assert_eq!(state.filtered_contacts().len(), 2);
    }

    #[test]
    fn leaving_search_keeps_the_term() {
        let mut state = state();
        type_text(&mut state, "987");
        send(&mut state, &[Event::Cancel]);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.search_query, "987");

        // Letters typed with the list focused are not search input.
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert_eq!(state.search_query, "987");

        send(&mut state, &[Event::ClearLine]);
        assert_eq!(state.filtered_contacts().len(), 2);
    }

    #[test]
    fn add_dialog_appends_a_contact() {
        let mut state = state();
        send(&mut state, &[Event::FocusList, Event::AddContact]);
        type_text(&mut state, "Ann Lee");
        send(&mut state, &[Event::Confirm]);
        type_text(&mut state, "555");
        send(&mut state, &[Event::Confirm]);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(names(&state), vec!["John Doe", "Jane Smith", "Ann Lee"]);
        let added = &state.contacts()[2];
        assert_eq!(added.phone_number, "555");
        assert!(added.id > ContactId(2));
    }

    #[test]
    fn add_with_empty_field_dispatches_nothing() {
        let mut state = state();
        send(&mut state, &[Event::AddContact]);
        type_text(&mut state, "Nameless Phone");
        send(&mut state, &[Event::Confirm, Event::Confirm]);

        assert_eq!(state.contacts().len(), 2);
        assert_eq!(state.store.revision(), 0);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn cancelled_add_dispatches_nothing() {
        let mut state = state();
        send(&mut state, &[Event::AddContact]);
        type_text(&mut state, "Ann");
        send(&mut state, &[Event::Confirm]);
        type_text(&mut state, "555");
        send(&mut state, &[Event::Cancel]);

        assert_eq!(state.contacts().len(), 2);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn dialog_swallows_control_events() {
        let mut state = state();
        send(&mut state, &[Event::AddContact]);
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        send(&mut state, &[Event::ToggleTheme, Event::DeleteContact(ContactId(1))]);

        assert!(state.input_mode.is_prompt());
        assert!(!state.store.state().is_dark_mode);
        assert_eq!(state.contacts().len(), 2);
    }

    #[test]
    fn edit_dialog_replaces_fields_and_keeps_id() {
        let mut state = state();
        send(&mut state, &[Event::EditContact(ContactId(1)), Event::ClearLine]);
        type_text(&mut state, "Johnny");
        send(&mut state, &[Event::Confirm, Event::Confirm]);

        let edited = state.find_contact(ContactId(1)).unwrap();
        assert_eq!(edited.name, "Johnny");
        assert_eq!(edited.phone_number, "123456789");
        assert_eq!(names(&state), vec!["Johnny", "Jane Smith"]);
    }

    #[test]
    fn edit_accepts_empty_values() {
        let mut state = state();
        send(&mut state, &[Event::EditContact(ContactId(2)), Event::ClearLine, Event::Confirm]);
        send(&mut state, &[Event::ClearLine, Event::Confirm]);

        let edited = state.find_contact(ContactId(2)).unwrap();
        assert_eq!(edited.name, "");
        assert_eq!(edited.phone_number, "");
    }

    #[test]
    fn cancelled_edit_keeps_contact() {
        let mut state = state();
        send(&mut state, &[Event::EditContact(ContactId(2)), Event::ClearLine, Event::Cancel]);
        assert_eq!(state.find_contact(ContactId(2)).unwrap().name, "Jane Smith");
    }

    #[test]
    fn edit_of_missing_contact_is_a_no_op() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::EditContact(ContactId(77))).unwrap();
        assert!(!render);
        assert_eq!(state.input_mode, InputMode::Search);
    }

    #[test]
    fn edit_of_contact_deleted_meanwhile_changes_nothing() {
        let mut state = state();
        send(&mut state, &[Event::EditContact(ContactId(1))]);
        // The contact disappears while the dialog is open.
        state.dispatch(StoreAction::DeleteContact(ContactId(1)));
        send(&mut state, &[Event::Confirm, Event::Confirm]);

        assert_eq!(names(&state), vec!["Jane Smith"]);
    }

    #[test]
    fn delete_is_unconditional_and_idempotent() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::DeleteContact(ContactId(1))).unwrap();
        assert!(render);
        let (render, _) = handle_event(&mut state, &Event::DeleteContact(ContactId(1))).unwrap();
        assert!(!render);
        assert_eq!(names(&state), vec!["Jane Smith"]);
    }

    #[test]
    fn toggle_theme_flips_mode_each_time() {
        let mut state = state();
        send(&mut state, &[Event::ToggleTheme]);
        assert!(state.store.state().is_dark_mode);
        send(&mut state, &[Event::ToggleTheme]);
        assert!(!state.store.state().is_dark_mode);
    }

    #[test]
    fn close_focus_emits_host_action() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn search_is_not_refocused_after_a_dialog() {
        let mut state = state();
        send(&mut state, &[Event::AddContact, Event::Cancel]);
        assert_eq!(state.input_mode, InputMode::Normal);

        send(&mut state, &[Event::FocusSearch]);
        assert_eq!(state.input_mode, InputMode::Search);
    }

    #[test]
    fn dispatching_a_taken_id_leaves_the_list_alone() {
        let mut state = state();
        let changed = state.dispatch(StoreAction::AddContact(Contact::new(ContactId(1), "Dup", "1")));

        assert!(!changed);
        let ids: Vec<i64> = state.contacts().iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    fn event_strategy() -> impl Strategy<Value = Event> {
        let plain = proptest::sample::select(vec![
            Event::KeyDown,
            Event::KeyUp,
            Event::FocusSearch,
            Event::FocusList,
            Event::Backspace,
            Event::ClearLine,
            Event::Cancel,
            Event::ToggleTheme,
        ]);
        prop_oneof![
            3 => plain,
            2 => proptest::char::range('a', 'e').prop_map(Event::Char),
            2 => Just(Event::Confirm),
            2 => Just(Event::AddContact),
            1 => (0i64..4).prop_map(|id| Event::EditContact(ContactId(id))),
            1 => (0i64..4).prop_map(|id| Event::DeleteContact(ContactId(id))),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

        #[test]
        fn ids_stay_unique_for_any_event_sequence(
            events in proptest::collection::vec(event_strategy(), 0..80)
        ) {
            let mut state = state();
            for event in &events {
                handle_event(&mut state, event).unwrap();
                let unique: HashSet<_> = state.contacts().iter().map(|c| c.id).collect();
                prop_assert_eq!(unique.len(), state.contacts().len());
            }
        }
    }
}
