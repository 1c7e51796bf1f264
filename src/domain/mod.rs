//! Domain layer for the contacts plugin.
//!
//! Core types that do not depend on Zellij or on the rendering layer.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`contact`]: Contact record, ids and the seed data

pub mod contact;
pub mod error;

pub use contact::{seed_contacts, Contact, ContactId, IdGenerator};
pub use error::{ContactsError, Result};
