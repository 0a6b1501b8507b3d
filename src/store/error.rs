//! # Store Errors
//!
//! Failures crossing the wire to the external store. Nothing here is
//! retried; callers decide how a failure surfaces.

use serde::Deserialize;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from the external store client
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport failure: connect, send, or response decode
    #[error("store request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status
    #[error("store responded with status {status}: {message}")]
    Failed { status: u16, message: String },

    /// Request body could not be encoded
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// A request could not be constructed
    #[error("invalid store request: {0}")]
    InvalidRequest(String),

    /// A mutation succeeded but the store returned no rows
    #[error("mutation returned no rows")]
    RowNotReturned,
}

impl StoreError {
    /// Build a `Failed` error from a response status and raw body,
    /// extracting the store's own message when the body carries one.
    pub fn failed(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody {
                message: Some(message),
            }) => message,
            _ => body.to_string(),
        };
        Self::Failed { status, message }
    }
}

/// Error body shape used by the store's REST layer; remaining fields
/// (`code`, `details`, `hint`) are ignored
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}
