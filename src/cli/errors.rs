//! CLI-specific error types
//!
//! Every CLI failure is fatal; main prints it and exits non-zero.

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Environment configuration is missing or invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Store client could not be constructed
    #[error("store client error: {0}")]
    Store(#[from] StoreError),

    /// Runtime or server I/O failure
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}
