//! Zellij plugin entry point.
//!
//! Translates host events into library [`Event`]s and executes the
//! [`Action`]s the library returns. All host calls live here.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, build `AppState`, request
//!    `WebAccess`
//! 2. **Permission**: granted sends `Event::Ready`, which issues the
//!    categories and products requests; denied sends `Event::PermissionDenied`
//! 3. **Update**: keys and `WebRequestResult`s go through `handle_event`
//! 4. **Render**: delegate to `zcatalog::ui::render`
//!
//! # Keybindings
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `h`/`Left`, `l`/`Right`: Previous/next image
//! - `n`/`]`/`PageDown`, `p`/`[`/`PageUp`: Next/previous page
//! - `s`: Cycle sort
//! - `c`: Pick category
//! - `/`: Search
//! - `r`: Reset filters
//! - `b`/`Backspace`, `f`: Back/forward
//! - `q`: Close plugin
//!
//! Search mode: characters edit the input, `Enter` submits, `Esc` cancels.
//!
//! Category picker: `j`/`k`/arrows move, `Enter` applies, `Esc`/`q` cancels.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zcatalog::gateway::{ApiResponse, ResponseTag};
use zcatalog::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

struct State {
    app: zcatalog::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zcatalog::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zcatalog::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            api_url = %config.api_url,
            search_fetch_limit = config.search_fetch_limit,
            "parsed configuration"
        );
        self.app = zcatalog::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => match permissions {
                PermissionStatus::Granted => {
                    tracing::debug!("web access granted");
                    Event::Ready
                }
                PermissionStatus::Denied => Event::PermissionDenied,
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    Self::execute_action(action);
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
        zcatalog::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

        match self.app.input_mode {
            InputMode::Search => match key.bare_key {
                BareKey::Enter => Some(Event::Confirm),
                BareKey::Esc => Some(Event::Escape),
                BareKey::Backspace => Some(Event::Backspace),
                BareKey::Char(c) => Some(Event::Char(c)),
                _ => None,
            },
            InputMode::CategoryPicker => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Some(Event::KeyDown),
                BareKey::Up | BareKey::Char('k') => Some(Event::KeyUp),
                BareKey::Enter => Some(Event::Confirm),
                BareKey::Esc | BareKey::Char('q') => Some(Event::Escape),
                _ => None,
            },
            InputMode::Normal => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Left | BareKey::Char('h') => Event::PrevImage,
                BareKey::Right | BareKey::Char('l') => Event::NextImage,
                BareKey::PageDown | BareKey::Char('n' | ']') => Event::NextPage,
                BareKey::PageUp | BareKey::Char('p' | '[') => Event::PrevPage,
                BareKey::Char('s') => Event::CycleSort,
                BareKey::Char('c') => Event::OpenCategoryPicker,
                BareKey::Char('/') => Event::SearchMode,
                BareKey::Char('r') => Event::ResetFilters,
                BareKey::Backspace | BareKey::Char('b') => Event::HistoryBack,
                BareKey::Char('f') => Event::HistoryForward,
                BareKey::Char('q') => Event::CloseFocus,
                BareKey::Enter => Event::Confirm,
                BareKey::Esc => Event::Escape,
                _ => return None,
            }),
        }
    }

    fn map_web_result(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(tag) = ResponseTag::from_context(context) else {
            tracing::debug!(status, "ignoring untagged web response");
            return None;
        };
        tracing::debug!(
            status,
            resource = %tag.resource,
            token = tag.token,
            body_len = body.len(),
            "web response received"
        );
        Some(Event::ResponseReceived {
            tag,
            response: ApiResponse::new(status, body),
        })
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin pane");
                hide_self();
            }
            Action::Fetch { token, request } => {
                let mut headers = BTreeMap::new();
                headers.insert("Accept".to_string(), "application/json".to_string());
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    headers,
                    vec![],
                    request.context(*token),
                );
            }
            Action::UpdateLocation { query } => {
                let title = if query.is_empty() {
                    "zcatalog".to_string()
                } else {
                    format!("zcatalog ?{query}")
                };
                rename_plugin_pane(get_plugin_ids().plugin_id, title);
            }
        }
    }
}
