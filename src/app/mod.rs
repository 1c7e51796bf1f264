//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the store/UI layers.
//!
//! # Architecture
//!
//! ```text
//! Key → Event → handle_event → StoreAction → Store::dispatch → reduce
//!                     │                                          │
//!                     ▼                                          ▼
//!               Action (host)                     filter → view model → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects for the plugin runtime
//! - [`filter`]: Search filter and its memoized view
//! - [`handler`]: Event processing and input handlers
//! - [`modes`]: Focus and display mode state machines
//! - [`prompt`]: Modal dialog replacing blocking prompts
//! - [`state`]: Central application state and view model computation

pub mod actions;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod prompt;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{DisplayMode, InputMode};
pub use prompt::{PromptDialog, PromptField, PromptKind};
pub use state::AppState;
