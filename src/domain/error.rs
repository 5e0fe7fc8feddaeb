//! Error types for the zcatalog plugin.
//!
//! This module defines the crate-wide error type [`CatalogError`] and the
//! [`FetchError`] raised by the remote gateway. Both are built with `thiserror`.
//! A `FetchError`'s `Display` output is shown to the user verbatim in the error
//! view, so its messages are written for people, not logs.

use crate::gateway::Resource;
use thiserror::Error;

/// Failure of a single request against the remote catalog API.
///
/// Network failures, 4xx and 5xx responses are not told apart: anything that
/// is not a 2xx status is a [`FetchError::Status`].
///
/// # Examples
///
/// ```
/// use zcatalog::domain::FetchError;
/// use zcatalog::gateway::Resource;
///
/// let err = FetchError::Status { resource: Resource::Products, status: 500 };
/// assert_eq!(err.to_string(), "Failed to fetch products (HTTP 500)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The API answered with a non-success status code.
    #[error("Failed to fetch {resource} (HTTP {status})")]
    Status {
        /// Which endpoint was requested.
        resource: Resource,
        /// HTTP status code returned by the host.
        status: u16,
    },

    /// The body could not be decoded into the expected shape.
    #[error("Failed to read {resource}: {message}")]
    Parse {
        /// Which endpoint was requested.
        resource: Resource,
        /// Decoder error description.
        message: String,
    },

    /// The host refused web access, so no request can be made.
    #[error("Web access was denied; the catalog cannot be loaded")]
    PermissionDenied,
}

/// The main error type for zcatalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A catalog request failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for zcatalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_messages_are_user_facing() {
        let status = FetchError::Status {
            resource: Resource::Categories,
            status: 404,
        };
        assert_eq!(status.to_string(), "Failed to fetch categories (HTTP 404)");

        let parse = FetchError::Parse {
            resource: Resource::Products,
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            parse.to_string(),
            "Failed to read products: expected value at line 1 column 1"
        );
    }

    #[test]
    fn catalog_error_wraps_fetch_error_transparently() {
        let err: CatalogError = FetchError::Status {
            resource: Resource::Products,
            status: 503,
        }
        .into();
        assert_eq!(err.to_string(), "Failed to fetch products (HTTP 503)");
    }
}
