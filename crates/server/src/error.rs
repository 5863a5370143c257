//! API error types.
//!
//! Each endpoint family answers with its own JSON envelope: `{error}` (plus
//! `details` for database creation), `{message}` for active-namespace
//! lookups, and `{success: false, message}` for connection checks. The
//! variants below carry enough to render the right one.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use blazedesk_metadata::MetadataError;
use blazedesk_triplestore::TripleStoreError;
use serde::Serialize;

/// API error response body.
#[derive(Debug, Default, Serialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid request method.")]
    MethodNotAllowed,

    /// The triple-store answered with a status the endpoint treats as failure.
    #[error("{error}")]
    Upstream {
        status: StatusCode,
        error: String,
        details: Option<String>,
    },

    /// Active-namespace lookup failure, rendered as `{message}`.
    #[error("{message}")]
    Lookup { status: StatusCode, message: String },

    /// Connection-check failure, rendered as `{success: false, message}`.
    #[error("{message}")]
    ConnectionFailed { status: StatusCode, message: String },

    #[error("An error occurred: {0}")]
    Metadata(#[from] MetadataError),

    #[error("An error occurred: {0}")]
    TripleStore(#[from] TripleStoreError),
}

impl ApiError {
    /// Upstream failure carrying the external status code.
    pub fn upstream(status: u16, error: impl Into<String>) -> Self {
        Self::Upstream {
            status: upstream_status(status),
            error: error.into(),
            details: None,
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Upstream { status, .. } => *status,
            Self::Lookup { status, .. } => *status,
            Self::ConnectionFailed { status, .. } => *status,
            Self::Metadata(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::TripleStore(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            Self::Upstream { error, details, .. } => ErrorResponse {
                error: Some(error.clone()),
                details: details.clone(),
                ..Default::default()
            },
            Self::Lookup { message, .. } => ErrorResponse {
                message: Some(message.clone()),
                ..Default::default()
            },
            Self::ConnectionFailed { message, .. } => ErrorResponse {
                success: Some(false),
                message: Some(message.clone()),
                ..Default::default()
            },
            other => ErrorResponse {
                error: Some(other.to_string()),
                ..Default::default()
            },
        }
    }
}

/// Map an external status code onto ours; codes outside 100..=999 become 502.
pub fn upstream_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }
        (status, Json(self.body())).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
