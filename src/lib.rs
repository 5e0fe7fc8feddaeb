//! zcatalog: a Zellij plugin for browsing a remote product catalog.
//!
//! - Products fetched from a REST catalog API, 20 per page
//! - Category filter, price/rating sorting and free-text search
//! - Filter state mirrored into a shareable query string with back/forward history
//! - Per-product image carousel
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← host I/O
//! └─────────────────────────────────────────────────────┘
//!                        │ Event / Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Filter transitions and fetch bookkeeping         │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Gateway       │   │ Navigation    │
//! │ (ui/)         │   │ (gateway/)    │   │ (navigation/) │
//! │ - Rendering   │   │ - Requests    │   │ - Query codec │
//! │ - Theming     │   │ - Decoding    │   │ - History     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/), Infrastructure, Observability    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The library never calls the Zellij host directly. `main.rs` translates host
//! events into [`Event`]s and executes the [`Action`]s returned by
//! [`handle_event`].

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod gateway;
pub mod infrastructure;
pub mod navigation;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{CatalogError, FetchError, Result};
pub use ui::Theme;

use gateway::{CatalogApi, DEFAULT_BASE_URL, DEFAULT_SEARCH_FETCH_LIMIT};
use std::collections::BTreeMap;

/// Plugin configuration parsed from the Zellij layout.
///
/// ```kdl
/// plugin location="file:/path/to/zcatalog.wasm" {
///     api_url "https://next-ecommerce-api.vercel.app"
///     search_fetch_limit "3000"
///     query "category=snacks&page=2"
///     theme "catppuccin-mocha"
///     theme_file "~/.config/zcatalog/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog API base URL.
    pub api_url: String,

    /// How many products a search request asks for before local sorting and
    /// paging. Must be positive.
    pub search_fetch_limit: usize,

    /// Initial location, in the same form as the pane title's query string.
    pub query: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme; `~` refers to the host home directory.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            search_fetch_limit: DEFAULT_SEARCH_FETCH_LIMIT,
            query: String::new(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses the plugin configuration map, falling back to defaults for
    /// missing or unparsable values.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use zcatalog::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("query".to_string(), "category=snacks".to_string());
    /// map.insert("search_fetch_limit".to_string(), "500".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.query, "category=snacks");
    /// assert_eq!(config.search_fetch_limit, 500);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let search_fetch_limit = config
            .get("search_fetch_limit")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_SEARCH_FETCH_LIMIT);

        Self {
            api_url: non_empty("api_url").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            search_fetch_limit,
            query: non_empty("query").unwrap_or_default(),
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
        }
    }

    fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            match Theme::from_file(&path) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::debug!(
                        theme_file = %infrastructure::strip_host_prefix(&path),
                        error = %e,
                        "failed to load theme from file, using default"
                    );
                    return Theme::default();
                }
            }
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }

    fn catalog_api(&self) -> CatalogApi {
        CatalogApi::new(&self.api_url, self.search_fetch_limit).unwrap_or_else(|e| {
            tracing::warn!(api_url = %self.api_url, error = %e, "invalid api configuration, using default");
            CatalogApi::default()
        })
    }
}

/// Builds the initial [`AppState`] from configuration.
///
/// Nothing is fetched yet; the first requests go out once the host grants
/// web access and [`Event::Ready`] is handled.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_url = %config.api_url, query = %config.query, "initializing zcatalog plugin");
    AppState::new(config.catalog_api(), &config.query, config.load_theme())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SortDirection, SortField, SortKey};

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_yields_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::from_zellij(&map(&[
            ("api_url", "http://localhost:3000"),
            ("search_fetch_limit", "250"),
            ("query", "search=chips"),
            ("theme", "catppuccin-latte"),
            ("theme_file", "~/theme.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.api_url, "http://localhost:3000");
        assert_eq!(config.search_fetch_limit, 250);
        assert_eq!(config.query, "search=chips");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("~/theme.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn invalid_fetch_limit_falls_back() {
        for raw in ["0", "-5", "lots", ""] {
            let config = Config::from_zellij(&map(&[("search_fetch_limit", raw)]));
            assert_eq!(config.search_fetch_limit, DEFAULT_SEARCH_FETCH_LIMIT, "{raw:?}");
        }
    }

    #[test]
    fn blank_values_count_as_missing() {
        let config = Config::from_zellij(&map(&[("api_url", "  "), ("theme", "")]));
        assert_eq!(config.api_url, DEFAULT_BASE_URL);
        assert_eq!(config.theme_name, None);
    }

    #[test]
    fn initialize_applies_query_and_theme() {
        let config = Config {
            query: "category=snacks&sortBy=price&order=desc&page=2".to_string(),
            theme_name: Some("catppuccin-frappe".to_string()),
            ..Config::default()
        };

        let state = initialize(&config);
        assert_eq!(state.filter.category.as_deref(), Some("snacks"));
        assert_eq!(
            state.filter.sort,
            Some(SortKey::new(SortField::Price, SortDirection::Desc))
        );
        assert_eq!(state.filter.page(), 2);
        assert_eq!(state.theme.name, "catppuccin-frappe");
    }

    #[test]
    fn theme_file_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mocha = include_str!("../themes/catppuccin-mocha.toml");
        std::fs::write(&path, mocha.replace("catppuccin-mocha", "custom")).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(path.to_string_lossy().into_owned()),
            ..Config::default()
        };
        assert_eq!(config.load_theme().name, "custom");
    }

    #[test]
    fn bad_theme_sources_fall_back_to_default() {
        let unknown = Config {
            theme_name: Some("solarized".to_string()),
            ..Config::default()
        };
        assert_eq!(unknown.load_theme(), Theme::default());

        let missing = Config {
            theme_file: Some("/nonexistent/zcatalog-theme.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(missing.load_theme(), Theme::default());
    }

    #[test]
    fn invalid_api_url_falls_back_to_default_api() {
        let config = Config {
            api_url: "ftp://catalog.example".to_string(),
            ..Config::default()
        };
        assert_eq!(config.catalog_api().base_url(), DEFAULT_BASE_URL);
    }
}
