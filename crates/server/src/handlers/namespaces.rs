//! Database and namespace creation.

use super::common::MessageResponse;
use crate::error::{ApiError, ApiResult, upstream_status};
use crate::metrics::observe_triplestore;
use crate::state::AppState;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Form, FromRequest, Multipart, Request, State};
use axum::http::header::CONTENT_TYPE;
use blazedesk_core::NamespaceProperties;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct CreateDatabaseForm {
    pub namespace: Option<String>,
}

/// POST /create_database/
///
/// Accepts the `namespace` field either url-encoded or as multipart form data.
pub async fn create_database(
    State(state): State<AppState>,
    request: Request,
) -> ApiResult<Json<MessageResponse>> {
    let namespace = match namespace_field(&state, request).await? {
        Some(ns) if !ns.is_empty() => ns,
        _ => return Err(ApiError::BadRequest("Namespace is required.".to_string())),
    };

    let response = observe_triplestore(
        "create_database",
        state.triplestore.create_database(&namespace),
    )
    .await?;

    if !response.is_ok() {
        return Err(ApiError::Upstream {
            status: upstream_status(response.status),
            error: "Failed to create database".to_string(),
            details: Some(response.body),
        });
    }

    tracing::info!(namespace = %namespace, "Database created");
    Ok(Json(MessageResponse::new("Database created successfully")))
}

async fn namespace_field(state: &AppState, request: Request) -> ApiResult<Option<String>> {
    let is_multipart = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"));

    if !is_multipart {
        let Form(form) = Form::<CreateDatabaseForm>::from_request(request, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        return Ok(form.namespace);
    }

    let mut multipart = Multipart::from_request(request, state)
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        if field.name() == Some("namespace") {
            let value = field
                .text()
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            return Ok(Some(value));
        }
    }
    Ok(None)
}

/// Body of a namespace creation request.
///
/// Fields are kept loosely typed so that well-formed JSON with an
/// unexpected field type gets a field-specific error.
#[derive(Debug, Deserialize)]
pub struct CreateNamespaceRequest {
    #[serde(default)]
    pub namespace: Option<Value>,
    #[serde(default)]
    pub properties: Option<PropertiesField>,
}

/// `properties` as sent by the caller; only an object is usable.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PropertiesField {
    Object(NamespaceProperties),
    Other(Value),
}

/// Namespace name from a loosely typed field. Numbers are accepted as
/// their decimal text; `null`, `false`, `0` and `""` count as absent.
fn namespace_text(value: Option<Value>) -> ApiResult<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Ok(s),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Ok(n.to_string()),
        None | Some(Value::Null | Value::Bool(false) | Value::String(_) | Value::Number(_)) => {
            Err(ApiError::BadRequest("Namespace is required.".to_string()))
        }
        Some(_) => Err(ApiError::BadRequest(
            "Namespace must be a string.".to_string(),
        )),
    }
}

/// POST /create_namespace/
pub async fn create_namespace(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<MessageResponse>> {
    let request: CreateNamespaceRequest = serde_json::from_slice(&body)
        .map_err(|_| ApiError::BadRequest("Invalid JSON payload.".to_string()))?;

    let namespace = namespace_text(request.namespace)?;
    let properties = match request.properties {
        None => NamespaceProperties::new(),
        Some(PropertiesField::Object(properties)) => properties,
        Some(PropertiesField::Other(_)) => {
            return Err(ApiError::BadRequest(
                "Properties must be a JSON object.".to_string(),
            ));
        }
    };

    tracing::debug!(
        namespace = %namespace,
        properties = properties.len(),
        "Received namespace creation request"
    );

    let response = observe_triplestore(
        "create_namespace",
        state.triplestore.create_namespace(&namespace, &properties),
    )
    .await?;

    if !matches!(response.status, 200 | 201) {
        return Err(ApiError::upstream(
            response.status,
            format!(
                "Failed to create namespace. Status code: {}, Response: {}",
                response.status, response.body
            ),
        ));
    }

    tracing::info!(namespace = %namespace, "Namespace created");
    Ok(Json(MessageResponse::new(format!(
        "Namespace '{namespace}' created successfully."
    ))))
}
