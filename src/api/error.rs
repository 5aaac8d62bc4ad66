//! API error types.

use thiserror::Error;

/// Failures surfaced by an [`ItemsApi`](super::ItemsApi) call.
///
/// Transient and permanent failures are not distinguished; callers log and move on.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body is not valid JSON for the expected schema.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The response decoded but its values are unusable.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
