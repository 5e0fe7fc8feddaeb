//! Input mode and loading state types.
//!
//! # State Machine
//!
//! The plugin is in one of three input modes:
//! - **Normal**: Browsing commands (navigate, page, sort, open pickers)
//! - **Search**: Typing into the search input buffer
//! - **`CategoryPicker`**: Choosing a category from the fetched list
//!
//! Independently of the input mode, the product listing is either idle or
//! waiting on a products request identified by its token.

use chrono::{DateTime, Utc};

/// Current input handling mode.
///
/// Controls which keybindings are active and what the footer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default browsing mode.
    Normal,

    /// Typing a search term. Characters go into the search input buffer and
    /// nothing is fetched until the term is submitted.
    Search,

    /// Category list overlay is open.
    CategoryPicker,
}

/// Whether a products request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading {
        /// Token of the request being waited on.
        token: u64,
        /// When the request was issued; used for latency logging.
        started_at: DateTime<Utc>,
    },
}

impl LoadState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}
