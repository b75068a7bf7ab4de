//! Common error types for the metrics services

use thiserror::Error;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors shared across the workspace crates
#[derive(Error, Debug)]
pub enum Error {
    /// Upstream fetch failed (network error or HTTP error status)
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The fetched document is not a usable sheet export
    #[error("Sheet error: {0}")]
    Sheet(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
