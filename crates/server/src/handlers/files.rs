//! Uploaded file listing.

use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use blazedesk_metadata::models::UploadedFileRow;
use blazedesk_metadata::repos::UploadedFileRepo;
use serde::Serialize;

/// One recorded upload.
#[derive(Debug, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub graph_id: String,
    pub size: i64,
    pub id: i64,
}

impl From<UploadedFileRow> for FileEntry {
    fn from(row: UploadedFileRow) -> Self {
        Self {
            name: row.name,
            graph_id: row.graph_id,
            size: row.size,
            id: row.id,
        }
    }
}

/// File listing response.
#[derive(Debug, Serialize)]
pub struct FilesResponse {
    pub files: Vec<FileEntry>,
}

/// ANY /files/
pub async fn list_files(State(state): State<AppState>) -> ApiResult<Json<FilesResponse>> {
    let rows = state.metadata.list_uploaded_files().await?;
    Ok(Json(FilesResponse {
        files: rows.into_iter().map(FileEntry::from).collect(),
    }))
}
