//! Error types for the core domain.

use thiserror::Error;

/// Core domain error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
