//! Shared handler helpers.

use crate::error::ApiError;
use serde::Serialize;

/// Plain success envelope: `{"message": ...}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Method fallback for every route: 405 with a JSON error body.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
