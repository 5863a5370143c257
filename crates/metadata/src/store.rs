//! Metadata store trait and the SQLite implementation.

use crate::error::MetadataResult;
use crate::models::{NewUploadedFile, UploadedFileRow};
use crate::repos::UploadedFileRepo;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Combined metadata store trait.
#[async_trait]
pub trait MetadataStore: UploadedFileRepo + Send + Sync {
    /// Run database migrations.
    async fn migrate(&self) -> MetadataResult<()>;

    /// Check database connectivity and health.
    async fn health_check(&self) -> MetadataResult<()>;
}

/// SQLite-based metadata store.
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    /// Open (creating if missing) a SQLite database and apply the schema.
    pub async fn new(path: impl AsRef<Path>) -> MetadataResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}?mode=rwc", path.display()))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            // One writer at a time; avoids "database is locked" under axum concurrency.
            .max_connections(1)
            .connect_with(opts)
            .await?;

        let store = Self { pool };
        store.migrate().await?;

        tracing::debug!(path = %path.display(), "SQLite metadata store opened");

        Ok(store)
    }
}

#[async_trait]
impl MetadataStore for SqliteStore {
    async fn migrate(&self) -> MetadataResult<()> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        Ok(())
    }

    async fn health_check(&self) -> MetadataResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl UploadedFileRepo for SqliteStore {
    async fn create_uploaded_file(
        &self,
        file: &NewUploadedFile,
    ) -> MetadataResult<UploadedFileRow> {
        let row = sqlx::query_as::<_, UploadedFileRow>(
            "INSERT INTO uploaded_files (name, graph_id, size) VALUES (?, ?, ?) \
             RETURNING id, name, graph_id, size",
        )
        .bind(&file.name)
        .bind(&file.graph_id)
        .bind(file.size_column()?)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_uploaded_files(&self) -> MetadataResult<Vec<UploadedFileRow>> {
        let rows = sqlx::query_as::<_, UploadedFileRow>(
            "SELECT id, name, graph_id, size FROM uploaded_files ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS uploaded_files (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    graph_id TEXT NOT NULL,
    size INTEGER NOT NULL
);
"#;
