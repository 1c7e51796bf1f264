//! Side effects for the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` next to its render flag. Store
//! changes never appear here: they are applied synchronously through
//! [`AppState::dispatch`](crate::app::AppState::dispatch). Actions cover what
//! only the Zellij host can do.

/// Commands executed by the plugin shim after an event has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user presses `q` with the list focused.
    CloseFocus,
}
