//! Client-specific error type wrapping hyper errors.

use std::time::Duration;

use hyper::StatusCode;

use eve_app::ports::FetchError;

/// Errors originating from the hyper client.
#[derive(Debug, thiserror::Error)]
pub enum HyperError {
    /// Base URL plus path is not a valid URI.
    #[error("invalid URL {0:?}")]
    InvalidUrl(String),

    /// Connecting or exchanging the request failed.
    #[error("HTTP request failed")]
    Request(#[from] hyper_util::client::legacy::Error),

    /// Reading the response body failed.
    #[error("failed to read response body")]
    Body(#[from] hyper::Error),

    /// No response within the configured timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Non-2xx response.
    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),

    /// The body is not the expected JSON envelope.
    #[error("malformed JSON body")]
    Json(#[from] serde_json::Error),
}

impl From<HyperError> for FetchError {
    fn from(err: HyperError) -> Self {
        match err {
            HyperError::InvalidUrl(url) => Self::InvalidUrl(url),
            HyperError::Timeout(limit) => Self::Timeout(limit),
            HyperError::Status(status) => Self::Status(status.as_u16()),
            HyperError::Json(err) => Self::Decode(err),
            other => Self::Transport(Box::new(other)),
        }
    }
}
