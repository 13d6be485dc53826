//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the movieseek library
//! and the Zellij plugin system. It translates host events into library
//! events and library actions into host calls; all decisions live in the
//! library.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess` for OMDb lookups
//! 3. **Subscribe**: Key, `Timer`, `WebRequestResult`, `PermissionRequestResult`
//! 4. **Update**: Map events, delegate to `handle_event`, execute actions
//! 5. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key(..)` → input, navigation, and modal events (see below)
//! - `Timer(..)` → `Event::TimerElapsed` (debounce expiry)
//! - `WebRequestResult(..)` → `Event::WebReply { tag, reply }`; the tag
//!   travels in the request context
//! - `PermissionRequestResult(..)` → `Event::PermissionsResult { granted }`
//!
//! # Keybindings
//!
//! Outside the details modal:
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! While typing:
//! - characters / `Backspace`: Edit query
//! - `Ctrl+u`: Clear query
//! - `Enter` / `Tab` / `Down`: Move to results
//! - `PageUp` / `PageDown`: Previous / next page
//! - `Esc`: Clear query, or close the plugin when it is already empty
//!
//! While browsing results:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `h`/`Left`/`PageUp`, `l`/`Right`/`PageDown`: Previous / next page
//! - `Enter`: Open details
//! - `/` / `Esc`: Back to the search box
//! - `q`: Close plugin
//!
//! With the details modal open:
//! - `Esc` / `q` / `Enter`: Close modal; every other key is ignored

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use movieseek::api::{HttpReply, RequestTag};
use movieseek::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: movieseek::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: movieseek::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests `WebAccess`, needed for `web_request`.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        movieseek::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            base_url = %config.base_url,
            debounce_ms = config.debounce_ms,
            locale = ?config.locale,
            "parsed configuration"
        );
        self.app = movieseek::initialize(&config);

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(elapsed) => {
                tracing::trace!(elapsed, "timer fired");
                Event::TimerElapsed
            }
            zellij_tile::prelude::Event::WebRequestResult(status, headers, body, context) => {
                match Self::map_web_result(status, &headers, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        movieseek::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Rebuilds the request tag from the context and classifies the transport.
    fn map_web_result(
        status: u16,
        headers: &BTreeMap<String, String>,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(tag) = RequestTag::from_context(context) else {
            tracing::debug!(context = ?context, "ignoring web reply without a request tag");
            return None;
        };
        tracing::debug!(status, kind = ?tag.kind, request_id = tag.id, body_len = body.len(), "web reply");

        Some(Event::WebReply {
            tag,
            reply: HttpReply::from_host(status, headers, body),
        })
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if self.app.details.is_open() {
            return match key.bare_key {
                BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Some(Event::CloseModal),
                _ => None,
            };
        }

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                BareKey::Char('u') => Some(Event::ClearInput),
                _ => None,
            };
        }

        Some(match self.app.input_mode {
            InputMode::Typing => match key.bare_key {
                BareKey::Enter | BareKey::Tab | BareKey::Down => Event::FocusResults,
                BareKey::PageUp => Event::PreviousPage,
                BareKey::PageDown => Event::NextPage,
                BareKey::Esc if self.app.query_input.is_empty() => Event::CloseFocus,
                BareKey::Esc => Event::ClearInput,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            },
            InputMode::Browsing => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Left | BareKey::Char('h') | BareKey::PageUp => Event::PreviousPage,
                BareKey::Right | BareKey::Char('l') | BareKey::PageDown => Event::NextPage,
                BareKey::Enter => Event::OpenDetails,
                BareKey::Esc | BareKey::Char('/') => Event::FocusSearchBar,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            },
        })
    }

    /// Executes an action returned from event handling.
    ///
    /// - `ScheduleTimer`: `set_timeout`, answered by a `Timer` event
    /// - `WebRequest`: `web_request` GET with the tag as context
    /// - `CloseFocus`: hide the plugin pane
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::ScheduleTimer(delay) => {
                set_timeout(delay.as_secs_f64());
            }
            Action::WebRequest { url, tag } => {
                tracing::debug!(url = %url, kind = ?tag.kind, request_id = tag.id, "sending web request");
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], tag.to_context());
            }
        }
    }
}
