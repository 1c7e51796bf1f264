//! Zellij plugin entry point.
//!
//! Thin shim between the Zellij runtime and the library: it maps key presses
//! to [`Event`]s according to the current focus, hands them to
//! [`handle_event`], runs the returned [`Action`]s and delegates rendering.
//!
//! # Keybindings
//!
//! Everywhere outside a dialog:
//! - `Ctrl+n` / `Ctrl+p`: Move selection
//! - `Ctrl+u`: Clear the search field
//!
//! Search field focused:
//! - printable keys: Type into the search field
//! - `Esc` / `Tab` / `Enter` / `Down`: Move focus to the list
//! - `Ctrl+a`: Add contact
//! - `Ctrl+t`: Toggle light/dark mode
//!
//! List focused:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `/`: Focus the search field
//! - `a`: Add contact
//! - `e`: Edit selected contact
//! - `d`: Delete selected contact
//! - `t`: Toggle light/dark mode
//! - `q`: Hide the plugin
//!
//! Dialog open:
//! - printable keys, `Backspace`, `Ctrl+u`: Edit the field
//! - `Enter`: Next field / save
//! - `Esc`: Cancel

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zellij_contacts::{handle_event, Action, AppState, Config, Event, InputMode};

register_plugin!(State);

struct State {
    app: AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zellij_contacts::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zellij_contacts::observability::init_tracing(&config);

        let _span = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(?config, "parsed configuration");

        self.app = zellij_contacts::initialize(&config);

        request_permission(&[PermissionType::ChangeApplicationState]);
        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                tracing::debug!(?status, "permission request answered");
                return false;
            }
            _ => return false,
        };

        let _span = tracing::debug_span!("plugin_update", event = ?our_event).entered();

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for action in actions {
                    Self::execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        zellij_contacts::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);
        let plain = key.has_no_modifiers() || key.has_modifiers(&[KeyModifier::Shift]);

        match &self.app.input_mode {
            InputMode::Prompt(_) => Self::map_prompt_key(&key.bare_key, ctrl, plain),
            InputMode::Search => Self::map_shared_ctrl_key(&key.bare_key, ctrl)
                .or_else(|| Self::map_search_key(&key.bare_key, ctrl, plain)),
            InputMode::Normal => Self::map_shared_ctrl_key(&key.bare_key, ctrl)
                .or_else(|| self.map_list_key(&key.bare_key, plain)),
        }
    }

    fn map_shared_ctrl_key(bare_key: &BareKey, ctrl: bool) -> Option<Event> {
        if !ctrl {
            return None;
        }
        match bare_key {
            BareKey::Char('n') => Some(Event::KeyDown),
            BareKey::Char('p') => Some(Event::KeyUp),
            BareKey::Char('u') => Some(Event::ClearLine),
            _ => None,
        }
    }

    fn map_prompt_key(bare_key: &BareKey, ctrl: bool, plain: bool) -> Option<Event> {
        match bare_key {
            BareKey::Char('u') if ctrl => Some(Event::ClearLine),
            BareKey::Enter => Some(Event::Confirm),
            BareKey::Esc => Some(Event::Cancel),
            BareKey::Backspace => Some(Event::Backspace),
            BareKey::Char(c) if plain => Some(Event::Char(*c)),
            _ => None,
        }
    }

    fn map_search_key(bare_key: &BareKey, ctrl: bool, plain: bool) -> Option<Event> {
        match bare_key {
            BareKey::Char('a') if ctrl => Some(Event::AddContact),
            BareKey::Char('t') if ctrl => Some(Event::ToggleTheme),
            BareKey::Esc => Some(Event::Cancel),
            BareKey::Enter => Some(Event::Confirm),
            BareKey::Tab | BareKey::Down => Some(Event::FocusList),
            BareKey::Backspace => Some(Event::Backspace),
            BareKey::Char(c) if plain => Some(Event::Char(*c)),
            _ => None,
        }
    }

    fn map_list_key(&self, bare_key: &BareKey, plain: bool) -> Option<Event> {
        if !plain {
            return None;
        }
        match bare_key {
            BareKey::Down | BareKey::Char('j') => Some(Event::KeyDown),
            BareKey::Up | BareKey::Char('k') => Some(Event::KeyUp),
            BareKey::Char('/') => Some(Event::FocusSearch),
            BareKey::Char('a') => Some(Event::AddContact),
            BareKey::Char('t') => Some(Event::ToggleTheme),
            BareKey::Char('q') => Some(Event::CloseFocus),
            BareKey::Char('e') => self.app.selected_contact().map(|c| Event::EditContact(c.id)),
            BareKey::Char('d') => self.app.selected_contact().map(|c| Event::DeleteContact(c.id)),
            _ => None,
        }
    }

    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin pane");
                hide_self();
            }
        }
    }
}
