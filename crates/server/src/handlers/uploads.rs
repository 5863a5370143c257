//! Turtle file upload.

use super::common::MessageResponse;
use crate::error::{ApiError, ApiResult};
use crate::metrics::{UPLOAD_BYTES, UPLOADS_RECORDED, observe_triplestore};
use crate::state::AppState;
use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use blazedesk_metadata::models::NewUploadedFile;
use blazedesk_metadata::repos::UploadedFileRepo;
use bytes::Bytes;

/// The `file` part of an upload form.
struct UploadedPart {
    name: String,
    data: Bytes,
}

fn multipart_error(e: MultipartError) -> ApiError {
    ApiError::BadRequest(e.body_text())
}

/// POST /upload_ttl/
///
/// Records the upload, then forwards the raw bytes to the ingestion
/// endpoint. The record is kept even if forwarding fails.
pub async fn upload_ttl(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let mut multipart = multipart.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let mut graph_id: Option<String> = None;
    let mut file: Option<UploadedPart> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let field_name = field.name().map(str::to_owned);
        match field_name.as_deref() {
            Some("graph_id") => {
                graph_id = Some(field.text().await.map_err(multipart_error)?);
            }
            Some("file") => {
                // A part without a filename is a plain form value, not a file.
                let Some(name) = field.file_name().map(str::to_owned) else {
                    continue;
                };
                let data = field.bytes().await.map_err(multipart_error)?;
                file = Some(UploadedPart { name, data });
            }
            _ => {}
        }
    }

    let Some(file) = file else {
        return Err(ApiError::BadRequest("No file provided.".to_string()));
    };
    let Some(graph_id) = graph_id else {
        return Err(ApiError::BadRequest("graph_id is required.".to_string()));
    };

    let size = file.data.len() as u64;
    let row = state
        .metadata
        .create_uploaded_file(&NewUploadedFile::new(&file.name, &graph_id, size))
        .await?;

    UPLOADS_RECORDED.inc();
    UPLOAD_BYTES.inc_by(size);
    tracing::info!(
        id = row.id,
        name = %row.name,
        graph_id = %row.graph_id,
        size,
        "Upload recorded"
    );

    let response = match observe_triplestore(
        "ingest_turtle",
        state.triplestore.ingest_turtle(file.data),
    )
    .await
    {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(id = row.id, error = %e, "Forwarding failed; upload record left in place");
            return Err(e.into());
        }
    };

    if !response.is_ok() {
        tracing::warn!(
            id = row.id,
            status = response.status,
            "Ingestion rejected upload; upload record left in place"
        );
        return Err(ApiError::upstream(
            response.status,
            format!(
                "Failed to upload file to the server. Status code: {}, Response: {}",
                response.status, response.body
            ),
        ));
    }

    Ok(Json(MessageResponse::new(format!(
        "File '{}' uploaded successfully.",
        file.name
    ))))
}
