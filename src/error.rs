//! Crate-wide error type
//!
//! Only configuration loading and snapshot export can fail. The physics core
//! handles degenerate input by policy and never returns an error.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Configuration value out of range or inconsistent with another value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Malformed JSON in a config file or snapshot.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a config or writing a snapshot failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
