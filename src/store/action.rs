//! Store actions: tagged records describing a state transition.
//!
//! Actions serialize as `{"type": "ADD_CONTACT", "payload": {...}}`. A record
//! with a type the store does not know decodes to [`StoreAction::Unknown`],
//! which the reducer treats as a no-op.

use crate::domain::{Contact, ContactId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// A requested change to the contact store.
///
/// These are the only way to change the contact collection or the display
/// mode. They are distinct from [`crate::app::Action`], which describes side
/// effects for the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreAction {
    /// Appends a contact to the end of the collection.
    AddContact(Contact),

    /// Removes the contact with the given id, if present.
    DeleteContact(ContactId),

    /// Replaces the contact whose id matches the payload's id, if present.
    UpdateContact(Contact),

    /// Flips between light and dark display mode.
    ToggleTheme,

    /// Any action type this store does not understand, with or without a
    /// payload.
    Unknown,
}

impl StoreAction {
    /// Returns the wire name of the action, used as a tracing field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AddContact(_) => "ADD_CONTACT",
            Self::DeleteContact(_) => "DELETE_CONTACT",
            Self::UpdateContact(_) => "UPDATE_CONTACT",
            Self::ToggleTheme => "TOGGLE_THEME",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Wire shape of an action before its type is matched.
#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Option<serde_json::Value>,
}

fn payload<T, E>(payload: Option<serde_json::Value>) -> Result<T, E>
where
    T: DeserializeOwned,
    E: serde::de::Error,
{
    let value = payload.ok_or_else(|| E::missing_field("payload"))?;
    serde_json::from_value(value).map_err(E::custom)
}

impl<'de> Deserialize<'de> for StoreAction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawAction::deserialize(deserializer)?;
        match raw.kind.as_str() {
            "ADD_CONTACT" => payload(raw.payload).map(Self::AddContact),
            "DELETE_CONTACT" => payload(raw.payload).map(Self::DeleteContact),
            "UPDATE_CONTACT" => payload(raw.payload).map(Self::UpdateContact),
            "TOGGLE_THEME" => Ok(Self::ToggleTheme),
            _ => Ok(Self::Unknown),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_contact_uses_type_and_payload() {
        let action = StoreAction::AddContact(Contact::new(ContactId(3), "Ann Lee", "555"));
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "ADD_CONTACT",
                "payload": {"id": 3, "name": "Ann Lee", "phoneNumber": "555"}
            })
        );
    }

    #[test]
    fn delete_contact_decodes_from_bare_id_payload() {
        let action: StoreAction =
            serde_json::from_str(r#"{"type":"DELETE_CONTACT","payload":1}"#).unwrap();
        assert_eq!(action, StoreAction::DeleteContact(ContactId(1)));
    }

    #[test]
    fn toggle_theme_needs_no_payload() {
        let action: StoreAction = serde_json::from_str(r#"{"type":"TOGGLE_THEME"}"#).unwrap();
        assert_eq!(action, StoreAction::ToggleTheme);
    }

    #[test]
    fn unrecognised_type_decodes_to_unknown() {
        let action: StoreAction = serde_json::from_str(r#"{"type":"RESET_EVERYTHING"}"#).unwrap();
        assert_eq!(action, StoreAction::Unknown);
        assert_eq!(action.kind(), "UNKNOWN");
    }

    #[test]
    fn unrecognised_type_with_payload_decodes_to_unknown() {
        let with_map: StoreAction =
            serde_json::from_str(r#"{"type":"SET_FILTER","payload":{"term":"x"}}"#).unwrap();
        assert_eq!(with_map, StoreAction::Unknown);

        let with_int: StoreAction =
            serde_json::from_str(r#"{"type":"SET_PAGE","payload":7}"#).unwrap();
        assert_eq!(with_int, StoreAction::Unknown);
    }

    #[test]
    fn known_type_with_malformed_payload_is_rejected() {
        let missing = serde_json::from_str::<StoreAction>(r#"{"type":"ADD_CONTACT"}"#);
        assert!(missing.is_err());

        let wrong = serde_json::from_str::<StoreAction>(r#"{"type":"DELETE_CONTACT","payload":"one"}"#);
        assert!(wrong.is_err());
    }

    #[test]
    fn update_contact_decodes_camel_case_payload() {
        let action: StoreAction = serde_json::from_str(
            r#"{"type":"UPDATE_CONTACT","payload":{"id":2,"name":"Jane","phoneNumber":"1"}}"#,
        )
        .unwrap();
        assert_eq!(action, StoreAction::UpdateContact(Contact::new(ContactId(2), "Jane", "1")));
    }
}
