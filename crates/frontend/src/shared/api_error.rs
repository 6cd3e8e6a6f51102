//! Errors of backend calls.

use thiserror::Error;

/// Failure of a best-effort backend call.
///
/// Every variant renders as a message fit for a toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (CORS, offline, aborted).
    #[error("{0}")]
    Network(String),

    /// The backend answered with a status other than 200.
    #[error("Server responded with HTTP {0}")]
    Status(u16),

    /// The backend returned a text message where data was expected.
    #[error("{0}")]
    Backend(String),

    /// The body was neither the expected data nor a text message.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
