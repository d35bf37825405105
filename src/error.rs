//! Error types

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while setting up a particle field.
///
/// Stepping and drawing never fail; all errors surface at initialization.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad count, bounds, color, radius range or proximity.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Settings JSON could not be parsed.
    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings file could not be read (native host only).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Error::InvalidConfiguration(msg.into())
    }
}
