//! Search filter over the contact collection.
//!
//! A contact matches when its name contains the search term ignoring case, or
//! when its phone number contains the term exactly. An empty term matches
//! every contact. Order is always the collection order.
//!
//! [`FilteredView`] caches the last result and recomputes it only when the
//! store revision or the search term changes.

use crate::domain::Contact;

/// Returns `true` if `contact` should be shown for `term`.
#[must_use]
pub fn matches(contact: &Contact, term: &str) -> bool {
    contact.name.to_lowercase().contains(&term.to_lowercase())
        || contact.phone_number.contains(term)
}

/// Returns the contacts matching `term`, in collection order.
///
/// # Examples
///
/// ```
/// use zellij_contacts::app::filter::filter_contacts;
/// use zellij_contacts::domain::seed_contacts;
///
/// let contacts = seed_contacts();
/// let hits = filter_contacts(&contacts, "jane");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "Jane Smith");
/// ```
#[must_use]
pub fn filter_contacts(contacts: &[Contact], term: &str) -> Vec<Contact> {
    if term.is_empty() {
        return contacts.to_vec();
    }

    contacts.iter().filter(|c| matches(c, term)).cloned().collect()
}

/// Character ranges of `name` to highlight for `term`.
///
/// Every case-insensitive occurrence is reported as a `(start, end)` pair of
/// character indices (exclusive end). Names whose lowercase form has a
/// different character count are not highlighted.
#[must_use]
pub fn name_match_ranges(name: &str, term: &str) -> Vec<(usize, usize)> {
    if term.is_empty() {
        return vec![];
    }

    let name_lower = name.to_lowercase();
    let term_lower = term.to_lowercase();
    if name_lower.chars().count() != name.chars().count() {
        return vec![];
    }

    let term_chars = term_lower.chars().count();
    name_lower
        .match_indices(&term_lower)
        .map(|(byte_idx, _)| {
            let start = name_lower[..byte_idx].chars().count();
            (start, start + term_chars)
        })
        .collect()
}

/// Memoized filter result keyed by store revision and search term.
#[derive(Debug, Clone, Default)]
pub struct FilteredView {
    key: Option<(u64, String)>,
    contacts: Vec<Contact>,
}

impl FilteredView {
    /// Brings the cached result up to date.
    ///
    /// Returns `true` if the filter had to be recomputed.
    pub fn refresh(&mut self, revision: u64, contacts: &[Contact], term: &str) -> bool {
        if self
            .key
            .as_ref()
            .is_some_and(|(rev, cached_term)| *rev == revision && cached_term == term)
        {
            return false;
        }

        let _span = tracing::debug_span!(
            "filter_contacts",
            total_contacts = contacts.len(),
            term_len = term.len(),
            revision
        )
        .entered();

        self.contacts = filter_contacts(contacts, term);
        self.key = Some((revision, term.to_string()));

        tracing::debug!(filtered_count = self.contacts.len(), "search filter applied");
        true
    }

    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{seed_contacts, ContactId};

    fn ids(contacts: &[Contact]) -> Vec<i64> {
        contacts.iter().map(|c| c.id.0).collect()
    }

    #[test]
    fn empty_term_returns_everything_in_order() {
        let contacts = seed_contacts();
        assert_eq!(filter_contacts(&contacts, ""), contacts);
    }

    #[test]
    fn name_match_ignores_case() {
        let contacts = seed_contacts();
        assert_eq!(ids(&filter_contacts(&contacts, "jane")), vec![2]);
        assert_eq!(ids(&filter_contacts(&contacts, "JOHN")), vec![1]);
    }

    #[test]
    fn phone_match_is_a_substring() {
        let contacts = seed_contacts();
        assert_eq!(ids(&filter_contacts(&contacts, "987")), vec![2]);
        assert_eq!(ids(&filter_contacts(&contacts, "456")), vec![1]);
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter_contacts(&seed_contacts(), "000").is_empty());
    }

    #[test]
    fn phone_match_is_case_sensitive() {
        let contacts = vec![Contact::new(ContactId(7), "Desk", "EXT-12")];
        assert!(filter_contacts(&contacts, "ext").is_empty());
        assert_eq!(ids(&filter_contacts(&contacts, "EXT")), vec![7]);
        assert!(matches(&contacts[0], "desk"));
    }

    #[test]
    fn highlight_ranges_cover_every_occurrence() {
        assert_eq!(name_match_ranges("Anna Annex", "an"), vec![(0, 2), (5, 7)]);
        assert_eq!(name_match_ranges("Jane Smith", "SMI"), vec![(5, 8)]);
        assert!(name_match_ranges("Jane Smith", "").is_empty());
        assert!(name_match_ranges("Jane Smith", "xyz").is_empty());
    }

    #[test]
    fn view_recomputes_only_on_key_change() {
        let contacts = seed_contacts();
        let mut view = FilteredView::default();

        assert!(view.refresh(0, &contacts, ""));
        assert_eq!(view.len(), 2);
        assert!(!view.refresh(0, &contacts, ""));

        assert!(view.refresh(0, &contacts, "jane"));
        assert_eq!(ids(view.contacts()), vec![2]);

        assert!(view.refresh(1, &contacts, "jane"));
        assert!(!view.is_empty());
    }
}
