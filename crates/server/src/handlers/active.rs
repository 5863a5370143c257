//! Active database / repository lookup.

use crate::error::{ApiError, ApiResult};
use crate::metrics::observe_triplestore;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use blazedesk_core::{NamespaceDescriptor, NamespaceRole};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ActiveDatabaseResponse {
    pub active_database: NamespaceDescriptor,
}

#[derive(Debug, Serialize)]
pub struct ActiveRepositoryResponse {
    pub active_repository: NamespaceDescriptor,
}

async fn find_active(state: &AppState, role: NamespaceRole) -> ApiResult<NamespaceDescriptor> {
    let namespaces = observe_triplestore("list_namespaces", state.triplestore.list_namespaces())
        .await
        .map_err(|e| ApiError::Lookup {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Failed to fetch active {role}: {e}"),
        })?;

    role.select(namespaces).ok_or_else(|| ApiError::Lookup {
        status: StatusCode::NOT_FOUND,
        message: format!("No active {role} found"),
    })
}

/// GET /active-database/
pub async fn get_active_database(
    State(state): State<AppState>,
) -> ApiResult<Json<ActiveDatabaseResponse>> {
    let active_database = find_active(&state, NamespaceRole::Database).await?;
    Ok(Json(ActiveDatabaseResponse { active_database }))
}

/// GET /active-repository/
pub async fn get_active_repository(
    State(state): State<AppState>,
) -> ApiResult<Json<ActiveRepositoryResponse>> {
    let active_repository = find_active(&state, NamespaceRole::Repository).await?;
    Ok(Json(ActiveRepositoryResponse { active_repository }))
}
