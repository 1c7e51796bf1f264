//! Zellij sandbox filesystem conventions.
//!
//! Plugins see the host filesystem under `/host`, which maps to the directory
//! Zellij was started from (usually the user's home).

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
