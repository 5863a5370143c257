//! PostgreSQL-based metadata store implementation.

use crate::error::MetadataResult;
use crate::models::{NewUploadedFile, UploadedFileRow};
use crate::repos::UploadedFileRepo;
use crate::store::MetadataStore;
use async_trait::async_trait;
use blazedesk_core::config::PgSslMode;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode as SqlxPgSslMode};
use sqlx::{Pool, Postgres};
use std::str::FromStr;

/// PostgreSQL schema (embedded).
const POSTGRES_SCHEMA: &str = include_str!("postgres_schema.sql");

fn postgres_schema_statements(schema: &str) -> Vec<&str> {
    schema
        .split(';')
        .filter_map(|statement| {
            let trimmed = statement.trim();
            if trimmed.is_empty() {
                return None;
            }
            let has_sql = trimmed.lines().any(|line| {
                let line = line.trim();
                !line.is_empty() && !line.starts_with("--")
            });
            has_sql.then_some(trimmed)
        })
        .collect()
}

/// PostgreSQL-based metadata store.
pub struct PostgresStore {
    pool: Pool<Postgres>,
}

impl PostgresStore {
    /// Create a new PostgreSQL store from a connection URL.
    pub async fn from_url(url: &str, max_connections: u32) -> MetadataResult<Self> {
        let opts = PgConnectOptions::from_str(url)?;
        Self::connect(opts, max_connections).await
    }

    /// Create a new PostgreSQL store from individual connection parameters.
    pub async fn from_params(
        host: &str,
        port: u16,
        username: Option<&str>,
        password: Option<&str>,
        database: &str,
        ssl_mode: Option<PgSslMode>,
        max_connections: u32,
    ) -> MetadataResult<Self> {
        let mut opts = PgConnectOptions::new()
            .host(host)
            .port(port)
            .database(database);

        if let Some(user) = username {
            opts = opts.username(user);
        }

        if let Some(pass) = password {
            opts = opts.password(pass);
        }

        if let Some(mode) = ssl_mode {
            let sqlx_mode = match mode {
                PgSslMode::Disable => SqlxPgSslMode::Disable,
                PgSslMode::Prefer => SqlxPgSslMode::Prefer,
                PgSslMode::Require => SqlxPgSslMode::Require,
            };
            opts = opts.ssl_mode(sqlx_mode);
        }

        // Password is deliberately left out.
        tracing::info!(
            host = host,
            port = port,
            database = database,
            username = username.unwrap_or("<none>"),
            ssl_mode = ?ssl_mode,
            "Connecting to PostgreSQL with individual parameters"
        );

        Self::connect(opts, max_connections).await
    }

    async fn connect(opts: PgConnectOptions, max_connections: u32) -> MetadataResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_with(opts)
            .await?;

        let store = Self { pool };
        store.migrate().await?;

        Ok(store)
    }
}

#[async_trait]
impl MetadataStore for PostgresStore {
    async fn migrate(&self) -> MetadataResult<()> {
        // Prepared statements cannot hold more than one statement.
        for statement in postgres_schema_statements(POSTGRES_SCHEMA) {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    async fn health_check(&self) -> MetadataResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl UploadedFileRepo for PostgresStore {
    async fn create_uploaded_file(
        &self,
        file: &NewUploadedFile,
    ) -> MetadataResult<UploadedFileRow> {
        let row = sqlx::query_as::<_, UploadedFileRow>(
            "INSERT INTO uploaded_files (name, graph_id, size) VALUES ($1, $2, $3) \
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
