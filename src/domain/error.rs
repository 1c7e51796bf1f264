//! Error types for the contacts plugin.
//!
//! This module defines the centralized error type [`ContactsError`] and a type alias
//! [`Result`] used by the fallible parts of the plugin. User-facing operations
//! (adding, editing, deleting contacts) never fail; they degrade to no-ops. The
//! errors here cover the ambient concerns around them: configuration, theme
//! loading and filesystem access.

use thiserror::Error;

/// The main error type for contacts plugin operations.
///
/// # Examples
///
/// ```
/// use zellij_contacts::ContactsError;
///
/// fn validate_theme(name: &str) -> Result<(), ContactsError> {
///     Err(ContactsError::Theme(format!("unknown theme: {name}")))
/// }
///
/// assert!(validate_theme("nope").is_err());
/// ```
#[derive(Debug, Error)]
pub enum ContactsError {
    /// Filesystem or I/O operation failed.
    ///
    /// Converts automatically from `std::io::Error`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A theme file could not be read or parsed, or a theme name is unknown.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for contacts plugin operations.
pub type Result<T> = std::result::Result<T, ContactsError>;
