//! Connection check against an arbitrary Blazegraph instance.

use crate::error::{ApiError, ApiResult, upstream_status};
use crate::metrics::observe_triplestore;
use crate::state::AppState;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use blazedesk_core::ConnectionTarget;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectRequest {
    pub ip_address: Option<Value>,
    pub port: Option<Value>,
    pub database_type: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ConnectResponse {
    pub success: bool,
    pub message: String,
}

/// Text form of a loosely typed JSON field. `null`, `false`, `0` and `""`
/// count as absent.
fn field_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn internal(message: impl Into<String>) -> ApiError {
    ApiError::ConnectionFailed {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: message.into(),
    }
}

/// POST /connect_database/
pub async fn connect_database(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<ConnectResponse>> {
    let request: ConnectRequest =
        serde_json::from_slice(&body).map_err(|e| internal(e.to_string()))?;

    let target = ConnectionTarget::new(
        field_text(request.ip_address),
        field_text(request.port),
        field_text(request.database_type),
    )
    .map_err(|_| ApiError::BadRequest("Missing required fields".to_string()))?;

    let response = observe_triplestore(
        "check_connection",
        state.triplestore.check_connection(&target),
    )
    .await
    .map_err(|e| internal(e.to_string()))?;

    if !response.is_ok() {
        tracing::debug!(url = %target.sparql_url(), status = response.status, "Connection check failed");
        return Err(ApiError::ConnectionFailed {
            status: upstream_status(response.status),
            message: "Failed to connect".to_string(),
        });
    }

    Ok(Json(ConnectResponse {
        success: true,
        message: "Connected successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn port_may_be_string_or_number() {
        assert_eq!(field_text(Some(json!("9999"))), Some("9999".to_string()));
        assert_eq!(field_text(Some(json!(9999))), Some("9999".to_string()));
    }

    #[test]
    fn falsy_values_are_absent() {
        assert_eq!(field_text(None), None);
        assert_eq!(field_text(Some(Value::Null)), None);
        assert_eq!(field_text(Some(json!(0))), None);
        assert_eq!(field_text(Some(json!(false))), None);
        // Empty strings pass through here and are rejected by ConnectionTarget.
        assert_eq!(field_text(Some(json!(""))), Some(String::new()));
    }
}
