//! Sandbox filesystem helpers.
//!
//! The Zellij plugin sandbox mounts the host filesystem under `/host`; these
//! helpers translate between user-facing paths and sandbox paths.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, strip_host_prefix, trace_file};
