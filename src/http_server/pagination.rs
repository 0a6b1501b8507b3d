//! # Pagination
//!
//! Shared `skip`/`limit` query parameters for the list endpoints.

use serde::Deserialize;

use super::errors::{ApiError, ApiResult};

/// Default page size when the client sends none
pub const DEFAULT_LIMIT: usize = 100;

/// Hard ceiling on page size
pub const MAX_LIMIT: usize = 1000;

/// Window over a listing
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    /// Rows to skip from the start of the listing
    #[serde(default)]
    pub skip: usize,

    /// Maximum rows to return
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Reject windows larger than [`MAX_LIMIT`]
    pub fn validate(self) -> ApiResult<Self> {
        if self.limit > MAX_LIMIT {
            return Err(ApiError::InvalidQueryParam(format!(
                "limit {} exceeds maximum {}",
                self.limit, MAX_LIMIT
            )));
        }
        Ok(self)
    }
}
