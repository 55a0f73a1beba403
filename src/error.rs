//! Error taxonomy for the management client.
//!
//! # Design Decisions
//! - One enum for every failure a caller can observe
//! - 404 is its own variant so callers can match on it
//! - API errors keep the status line and raw body verbatim
//! - Nothing is retried or logged here; classification only

use axum::http::StatusCode;
use thiserror::Error;

/// Boxed error used for transport failures from the connection layer.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by client construction and every resource operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The endpoint address could not be parsed or has no usable target.
    #[error("invalid address '{address}': {reason}")]
    Address { address: String, reason: String },

    /// A keyed operation was called with an empty key.
    #[error("key is required")]
    KeyRequired,

    /// The request could not be built (e.g. the path is not a valid URI).
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] axum::http::Error),

    /// Connecting, sending, or reading the response failed.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The server answered 404.
    #[error("not found")]
    NotFound,

    /// The server answered with a non-404 error status.
    #[error("{status}: {body}")]
    Api { status: StatusCode, body: String },

    /// The entity could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body was not the expected JSON.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    /// True for the dedicated 404 outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }

    /// True when the exchange never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// HTTP status carried by the error, if the server produced one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::NotFound => Some(StatusCode::NOT_FOUND),
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn transport<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Error::Transport(err.into())
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
