use thiserror::Error;

/// Error taxonomy for the data layer.
///
/// Local rejections (`Validation`, `InvalidTransition`, `PermissionDenied`)
/// happen before any request is issued. `Api` carries the server's non-2xx
/// response. The type is `Clone` because coalesced cache readers all receive
/// the same failure, so every variant stores plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Required field missing or empty, caught before submission.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested task status change is not in the lifecycle table.
    #[error("invalid status transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// Caller is not allowed to perform the action; rejected client-side.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Server answered with a non-2xx status.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Request never produced a response (DNS, connect, timeout, ...).
    #[error("network error: {0}")]
    Network(String),

    /// Response body did not match the expected model.
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Network(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}
