//! Triple-store client error types.

use thiserror::Error;

/// Errors talking to the external triple-store.
///
/// Non-2xx answers to create/ingest/probe calls are not errors; they are
/// returned as [`crate::UpstreamResponse`] for the caller to interpret.
#[derive(Debug, Error)]
pub enum TripleStoreError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for triple-store operations.
pub type TripleStoreResult<T> = std::result::Result<T, TripleStoreError>;
