//! The pure state-transition function of the contact store.

use super::action::StoreAction;
use crate::app::modes::DisplayMode;
use crate::domain::{seed_contacts, Contact};

/// Everything the store owns: the contact collection and the display mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreState {
    /// Contacts in insertion order.
    pub contacts: Vec<Contact>,
    /// `true` while the dark palette is active.
    pub is_dark_mode: bool,
}

impl StoreState {
    /// The state a freshly loaded plugin starts from: two seed contacts, light mode.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            contacts: seed_contacts(),
            is_dark_mode: false,
        }
    }

    #[must_use]
    pub const fn display_mode(&self) -> DisplayMode {
        DisplayMode::from_dark_flag(self.is_dark_mode)
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Computes the next state from the current state and an action.
///
/// The input is never modified. Actions that reference an id not present in
/// the collection, an add whose id is already taken, and
/// [`StoreAction::Unknown`] return a state equal to the input.
///
/// # Examples
///
/// ```
/// use zellij_contacts::store::{reduce, StoreAction, StoreState};
/// use zellij_contacts::domain::ContactId;
///
/// let state = StoreState::initial();
/// let next = reduce(&state, StoreAction::DeleteContact(ContactId(1)));
/// assert_eq!(next.contacts.len(), 1);
/// assert_eq!(state.contacts.len(), 2);
/// ```
#[must_use]
pub fn reduce(state: &StoreState, action: StoreAction) -> StoreState {
    match action {
        StoreAction::AddContact(contact) if state.contacts.iter().any(|c| c.id == contact.id) => {
            tracing::debug!(id = contact.id.0, "ignoring add with duplicate id");
            state.clone()
        }
        StoreAction::AddContact(contact) => {
            let mut contacts = Vec::with_capacity(state.contacts.len() + 1);
            contacts.extend_from_slice(&state.contacts);
            contacts.push(contact);
            StoreState {
                contacts,
                is_dark_mode: state.is_dark_mode,
            }
        }
        StoreAction::DeleteContact(id) => StoreState {
            contacts: state
                .contacts
                .iter()
                .filter(|c| c.id != id)
                .cloned()
                .collect(),
            is_dark_mode: state.is_dark_mode,
        },
        StoreAction::UpdateContact(updated) => StoreState {
            contacts: state
                .contacts
                .iter()
                .map(|c| if c.id == updated.id { updated.clone() } else { c.clone() })
                .collect(),
            is_dark_mode: state.is_dark_mode,
        },
        StoreAction::ToggleTheme => StoreState {
            contacts: state.contacts.clone(),
            is_dark_mode: !state.is_dark_mode,
        },
        StoreAction::Unknown => state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactId;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn ann() -> Contact {
        Contact::new(ContactId(3), "Ann Lee", "555")
    }

    fn ids(state: &StoreState) -> Vec<i64> {
        state.contacts.iter().map(|c| c.id.0).collect()
    }

    #[test]
    fn add_appends_at_the_end() {
        let state = StoreState::initial();
        let next = reduce(&state, StoreAction::AddContact(ann()));
        assert_eq!(ids(&next), vec![1, 2, 3]);
        assert_eq!(ids(&state), vec![1, 2]);
    }

    #[test]
    fn delete_removes_only_the_matching_contact() {
        let next = reduce(&StoreState::initial(), StoreAction::DeleteContact(ContactId(1)));
        assert_eq!(
            next.contacts,
            vec![Contact::new(ContactId(2), "Jane Smith", "987654321")]
        );
    }

    #[test]
    fn delete_twice_is_idempotent() {
        let once = reduce(&StoreState::initial(), StoreAction::DeleteContact(ContactId(2)));
        let twice = reduce(&once, StoreAction::DeleteContact(ContactId(2)));
        assert_eq!(once, twice);
    }

    #[test]
    fn update_replaces_in_place_keeping_order_and_length() {
        let state = reduce(&StoreState::initial(), StoreAction::AddContact(ann()));
        let edited = Contact::new(ContactId(2), "Jane Doe", "111");
        let next = reduce(&state, StoreAction::UpdateContact(edited.clone()));

        assert_eq!(next.contacts.len(), state.contacts.len());
        assert_eq!(ids(&next), ids(&state));
        assert_eq!(next.contacts[1], edited);
        assert_eq!(next.contacts[0], state.contacts[0]);
        assert_eq!(next.contacts[2], state.contacts[2]);
    }

    #[test]
    fn update_of_missing_id_is_a_no_op() {
        let state = StoreState::initial();
        let next = reduce(
            &state,
            StoreAction::UpdateContact(Contact::new(ContactId(42), "Ghost", "0")),
        );
        assert_eq!(next, state);
    }

    #[test]
    fn toggle_twice_restores_display_mode() {
        let state = StoreState::initial();
        let dark = reduce(&state, StoreAction::ToggleTheme);
        assert!(dark.is_dark_mode);
        assert_eq!(dark.display_mode(), DisplayMode::Dark);
        let light = reduce(&dark, StoreAction::ToggleTheme);
        assert_eq!(light.is_dark_mode, state.is_dark_mode);
        assert_eq!(light.contacts, state.contacts);
    }

    #[test]
    fn unknown_action_leaves_state_untouched() {
        let state = StoreState::initial();
        assert_eq!(reduce(&state, StoreAction::Unknown), state);
    }

    #[test]
    fn add_with_taken_id_is_a_no_op() {
        let state = StoreState::initial();
        let next = reduce(
            &state,
            StoreAction::AddContact(Contact::new(ContactId(1), "Dup", "1")),
        );
        assert_eq!(next, state);
    }

    fn contact_strategy() -> impl Strategy<Value = Contact> {
        (0i64..6, "[a-z]{0,4}", "[0-9]{0,3}")
            .prop_map(|(id, name, phone)| Contact::new(ContactId(id), name, phone))
    }

    fn action_strategy() -> impl Strategy<Value = StoreAction> {
        prop_oneof![
            contact_strategy().prop_map(StoreAction::AddContact),
            (0i64..6).prop_map(|id| StoreAction::DeleteContact(ContactId(id))),
            contact_strategy().prop_map(StoreAction::UpdateContact),
            Just(StoreAction::ToggleTheme),
            Just(StoreAction::Unknown),
        ]
    }

    proptest! {
        #[test]
        fn ids_stay_unique_for_any_action_sequence(
            actions in proptest::collection::vec(action_strategy(), 0..40)
        ) {
            let mut state = StoreState::initial();
            for action in actions {
                let before = state.clone();
                state = reduce(&before, action);
                let unique: HashSet<_> = state.contacts.iter().map(|c| c.id).collect();
                prop_assert_eq!(unique.len(), state.contacts.len());
            }
        }
    }
}
