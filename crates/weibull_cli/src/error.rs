//! CLI error types.

use thiserror::Error;
use weibull_core::RandomError;

/// Errors surfaced by the `weibull` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Generation or validation failure from the core library.
    #[error(transparent)]
    Random(#[from] RandomError),

    /// A command-line argument could not be interpreted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The configuration file or environment is malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialising output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
