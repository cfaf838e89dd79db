//! Errors returned by the news search client.

use thiserror::Error;

/// A failed remote call.
///
/// The UI treats every variant the same way: the call failed. The variants
/// only exist so the log says why.
#[derive(Debug, Error)]
pub enum NewsError {
    /// Connection, timeout or body read failure.
    #[error("request to news service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("news service error ({status}): {body}")]
    Status {
        /// HTTP status returned
        status: reqwest::StatusCode,
        /// Response body, possibly empty
        body: String,
    },

    /// The body is neither `{ "results": [...] }` nor a bare array.
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}
