//! Metadata store test utilities.

use blazedesk_metadata::{MetadataError, MetadataResult, MetadataStore, PostgresStore};
use std::sync::Arc;
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;

/// Stable prefix for Docker/container startup failures in Postgres test setup.
/// Tests use this marker to decide whether to skip due to unavailable Docker.
pub const POSTGRES_CONTAINER_START_ERR_PREFIX: &str = "postgres-container-start:";

/// PostgreSQL test metadata store wrapper that owns its container.
#[allow(dead_code)]
pub struct PostgresTestMetadata {
    pub store: Arc<dyn MetadataStore>,
    pub host: String,
    pub port: u16,
    _container: ContainerAsync<Postgres>,
}

#[allow(dead_code)]
impl PostgresTestMetadata {
    /// Start a PostgreSQL container and open a store on it.
    pub async fn new() -> MetadataResult<Self> {
        let container = Postgres::default()
            .with_tag("15-alpine")
            .start()
            .await
            .map_err(|e| {
                MetadataError::Config(format!(
                    "{POSTGRES_CONTAINER_START_ERR_PREFIX} Failed to start PostgreSQL container: {e}"
                ))
            })?;

        let host = container
            .get_host()
            .await
            .expect("Failed to get host")
            .to_string();
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        // Default credentials from testcontainers-modules postgres
        let url = format!("postgres://postgres:postgres@{host}:{port}/postgres");
        let store = PostgresStore::from_url(&url, 5).await?;

        Ok(Self {
            store: Arc::new(store),
            host,
            port,
            _container: container,
        })
    }

    pub fn store(&self) -> Arc<dyn MetadataStore> {
        self.store.clone()
    }
}

/// Start a PostgreSQL test store, or `None` when Docker is unavailable or
/// `SKIP_POSTGRES_TESTS` is set.
///
/// Only container-start failures cause a skip; schema or connection errors
/// still panic.
#[allow(dead_code)]
pub async fn postgres_or_skip() -> Option<PostgresTestMetadata> {
    if std::env::var("SKIP_POSTGRES_TESTS").is_ok() {
        return None;
    }
    match PostgresTestMetadata::new().await {
        Ok(metadata) => Some(metadata),
        Err(err) => {
            let msg = err.to_string();
            if msg.contains(POSTGRES_CONTAINER_START_ERR_PREFIX) {
                eprintln!("Skipping PostgreSQL test (Docker unavailable): {msg}");
                None
            } else {
                panic!("PostgreSQL test setup failed: {msg}");
            }
        }
    }
}
