//! # API Errors
//!
//! Error types for the HTTP API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// A looked-up record does not exist
    #[error("{0}")]
    NotFound(&'static str),

    /// Invalid query parameter
    #[error("Invalid query parameter: {0}")]
    InvalidQueryParam(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// The external store failed; the detail goes to the log, not the client
    #[error("external store request failed")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// 404 for a missing company
    pub fn company_not_found() -> Self {
        Self::NotFound("Company not found")
    }

    /// 404 for a missing contact
    pub fn contact_not_found() -> Self {
        Self::NotFound("Contact not found")
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidQueryParam(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Store(err) = &self {
            tracing::error!(error = %err, "store request failed");
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
