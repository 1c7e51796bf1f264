//! Contact domain model and id generation.
//!
//! A [`Contact`] is a name/phone-number record identified by a [`ContactId`].
//! New ids come from an [`IdGenerator`], which hands out millisecond
//! timestamps while guaranteeing every id is strictly greater than any id it
//! has seen or issued before.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a contact within the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub i64);

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single entry in the contact list.
///
/// Identity is the `id`; two contacts with the same id are the same entry even
/// when their fields differ (an edit replaces the whole record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone_number: String,
}

impl Contact {
    /// Creates a contact from its parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use zellij_contacts::domain::{Contact, ContactId};
    ///
    /// let contact = Contact::new(ContactId(3), "Ann Lee", "555");
    /// assert_eq!(contact.name, "Ann Lee");
    /// assert_eq!(contact.phone_number, "555");
    /// ```
    #[must_use]
    pub fn new(id: ContactId, name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Returns the single-line label shown in the list: `"{name} - {phone}"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.phone_number)
    }
}

/// The two contacts every freshly loaded plugin starts with.
#[must_use]
pub fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact::new(ContactId(1), "John Doe", "123456789"),
        Contact::new(ContactId(2), "Jane Smith", "987654321"),
    ]
}

/// Issues contact ids that are unique across the lifetime of the plugin.
///
/// Ids are based on the wall clock in milliseconds. Two adds within the same
/// millisecond, a clock that moves backwards, or ids already present in the
/// store never lead to a duplicate: the generator always returns at least one
/// more than the highest id it knows about.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last_issued: i64,
}

impl IdGenerator {
    /// Creates a generator that will never issue an id at or below any of `existing`.
    #[must_use]
    pub fn seeded_from<'a>(existing: impl IntoIterator<Item = &'a Contact>) -> Self {
        let last_issued = existing.into_iter().map(|c| c.id.0).max().unwrap_or(0);
        Self { last_issued }
    }

    /// Returns the next id using the current time.
    pub fn next_id(&mut self) -> ContactId {
        self.next_id_at(chrono::Utc::now().timestamp_millis())
    }

    /// Returns the next id given a clock reading in milliseconds.
    pub fn next_id_at(&mut self, now_millis: i64) -> ContactId {
        let id = now_millis.max(self.last_issued.saturating_add(1));
        self.last_issued = id;
        ContactId(id)
    }

    /// Makes sure ids issued later stay above `id`.
    pub fn observe(&mut self, id: ContactId) {
        self.last_issued = self.last_issued.max(id.0);
    }
}
