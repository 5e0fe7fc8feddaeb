//! Location handling.
//!
//! The plugin has no browser URL, so the location is a query string kept in
//! an in-plugin [`History`] and mirrored into the pane title.

pub mod history;
pub mod query;

pub use history::History;
pub use query::{build_query, parse_query};
