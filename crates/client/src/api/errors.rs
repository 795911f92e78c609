//! Error taxonomy for API operations

use std::error::Error as StdError;
use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure modes of an API call.
///
/// `Cancelled` is kept separate from `Network` so callers can treat
/// caller-initiated aborts (list refresh superseded by a newer one)
/// differently from genuine connectivity failures.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: DNS, TCP, TLS, or timeout.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The request was aborted by its initiator before completing.
    #[error("request cancelled")]
    Cancelled,

    /// The server rejected the request, either with a non-2xx status or
    /// with a `success: false` envelope.
    #[error("server error: {0}")]
    Server(String),

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server returned an id field with a type other than string or
    /// integer.
    #[error("unexpected type for `{0}`: expected string or integer")]
    IdTypeMismatch(&'static str),

    /// Bad client configuration, detected before any request was sent.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Whether this error represents a caller-initiated abort.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }

    /// Classifies a transport-level failure, separating caller aborts
    /// from real network errors.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if Self::is_interrupted(&err) {
            ApiError::Cancelled
        } else {
            ApiError::Network(err)
        }
    }

    fn is_interrupted(err: &reqwest::Error) -> bool {
        let mut source = err.source();
        while let Some(cause) = source {
            if let Some(io_err) = cause.downcast_ref::<io::Error>() {
                if io_err.kind() == io::ErrorKind::Interrupted {
                    return true;
                }
            }
            source = cause.source();
        }
        false
    }
}
