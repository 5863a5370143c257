//! Uploaded file repository trait.

use crate::error::MetadataResult;
use crate::models::{NewUploadedFile, UploadedFileRow};
use async_trait::async_trait;

/// Repository for uploaded turtle file records.
///
/// Rows are append-only: they are inserted once per upload and never
/// updated or deleted through this trait.
#[async_trait]
pub trait UploadedFileRepo: Send + Sync {
    /// Record an upload and return the stored row with its assigned id.
    async fn create_uploaded_file(&self, file: &NewUploadedFile)
    -> MetadataResult<UploadedFileRow>;

    /// List every recorded upload in insertion order.
    async fn list_uploaded_files(&self) -> MetadataResult<Vec<UploadedFileRow>>;
}
