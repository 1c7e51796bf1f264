//! Action-driven contact store.
//!
//! The store owns the contact collection and the display-mode flag. All
//! changes go through [`Store::dispatch`], which queues the action and runs the
//! pure [`reduce`] function over the queue until it is empty.
//!
//! # Architecture
//!
//! ```text
//! dispatch(action) → queue → reduce(state, action) → new state (+ revision bump)
//! ```
//!
//! The `revision` counter increases every time a reduction actually changes
//! the state. Derived views (the search filter) use it as a cheap change key.
//!
//! # Modules
//!
//! - [`action`]: The [`StoreAction`] tagged record
//! - [`reducer`]: [`StoreState`] and the [`reduce`] transition function

pub mod action;
pub mod reducer;

pub use action::StoreAction;
pub use reducer::{reduce, StoreState};

use std::collections::VecDeque;

/// Holds the current [`StoreState`] and applies dispatched actions in order.
#[derive(Debug, Clone)]
pub struct Store {
    state: StoreState,
    queue: VecDeque<StoreAction>,
    revision: u64,
}

impl Store {
    #[must_use]
    pub fn new(initial: StoreState) -> Self {
        Self {
            state: initial,
            queue: VecDeque::new(),
            revision: 0,
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub const fn state(&self) -> &StoreState {
        &self.state
    }

    /// Number of reductions so far that changed the state.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Enqueues `action` and drains the queue.
    ///
    /// Returns `true` if the state changed as a result.
    pub fn dispatch(&mut self, action: StoreAction) -> bool {
        self.queue.push_back(action);

        let mut changed = false;
        while let Some(action) = self.queue.pop_front() {
            let _span = tracing::debug_span!("store_dispatch", action = action.kind()).entered();

            let next = reduce(&self.state, action);
            if next == self.state {
                tracing::debug!("action left state unchanged");
                continue;
            }

            self.state = next;
            self.revision += 1;
            changed = true;

            tracing::debug!(
                revision = self.revision,
                contact_count = self.state.contacts.len(),
                is_dark_mode = self.state.is_dark_mode,
                "state updated"
            );
        }

        changed
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreState::initial())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Contact, ContactId};

    #[test]
    fn starts_from_seed_at_revision_zero() {
        let store = Store::default();
        assert_eq!(store.revision(), 0);
        assert_eq!(store.state().contacts.len(), 2);
        assert!(!store.state().is_dark_mode);
    }

    #[test]
    fn revision_moves_only_on_real_changes() {
        let mut store = Store::default();

        assert!(store.dispatch(StoreAction::AddContact(Contact::new(
            ContactId(3),
            "Ann Lee",
            "555"
        ))));
        assert_eq!(store.revision(), 1);

        assert!(!store.dispatch(StoreAction::DeleteContact(ContactId(404))));
        assert!(!store.dispatch(StoreAction::Unknown));
        assert_eq!(store.revision(), 1);

        assert!(store.dispatch(StoreAction::ToggleTheme));
        assert_eq!(store.revision(), 2);
        assert!(store.state().is_dark_mode);
    }

    #[test]
    fn delete_seed_contact_leaves_the_other() {
        let mut store = Store::default();
        store.dispatch(StoreAction::DeleteContact(ContactId(1)));
        let ids: Vec<_> = store.state().contacts.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![ContactId(2)]);
    }
}
