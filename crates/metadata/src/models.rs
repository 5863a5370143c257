//! Database models mapping to the metadata schema.

use sqlx::FromRow;

/// A recorded turtle upload.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UploadedFileRow {
    pub id: i64,
    pub name: String,
    pub graph_id: String,
    pub size: i64,
}

/// Fields supplied when recording an upload; `id` is assigned on insert.
#[derive(Debug, Clone)]
pub struct NewUploadedFile {
    pub name: String,
    pub graph_id: String,
    /// Byte length of the uploaded content.
    pub size: u64,
}

impl NewUploadedFile {
    pub fn new(name: impl Into<String>, graph_id: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            graph_id: graph_id.into(),
            size,
        }
    }

    /// Size as stored in the `BIGINT` column.
    pub(crate) fn size_column(&self) -> crate::MetadataResult<i64> {
        i64::try_from(self.size).map_err(|_| {
            crate::MetadataError::InvalidValue(format!("file size {} exceeds i64", self.size))
        })
    }
}
