//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to the host directly. It returns a
//! `Vec<Action>` after each event and the plugin shim executes them in order.

use crate::gateway::ApiRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q').
    CloseFocus,

    /// Issues an HTTP GET through the host.
    ///
    /// The response comes back as a `ResponseReceived` event carrying the same
    /// token, which is how stale product responses are recognized.
    Fetch {
        /// Request token, echoed back in the response context.
        token: u64,
        /// Resource and URL to request.
        request: ApiRequest,
    },

    /// Publishes a new location query string (shown in the pane title).
    UpdateLocation {
        /// Canonical query string without the leading `?`.
        query: String,
    },
}
