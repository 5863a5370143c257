//! Metadata store abstraction and implementations for Blazedesk.
//!
//! The only persisted entity is the uploaded-file record: name, target
//! graph, byte size and a surrogate id. Namespaces live in Blazegraph and
//! are never mirrored here.

pub mod error;
pub mod models;
pub mod postgres;
pub mod repos;
pub mod store;

pub use error::{MetadataError, MetadataResult};
pub use postgres::PostgresStore;
pub use store::{MetadataStore, SqliteStore};

use blazedesk_core::config::MetadataConfig;
use std::sync::Arc;

/// Create a metadata store from configuration.
pub async fn from_config(config: &MetadataConfig) -> MetadataResult<Arc<dyn MetadataStore>> {
    config.validate().map_err(MetadataError::Config)?;

    match config {
        MetadataConfig::Sqlite { path } => {
            let store = SqliteStore::new(path).await?;
            Ok(Arc::new(store) as Arc<dyn MetadataStore>)
        }
        MetadataConfig::Postgres {
            url,
            host,
            port,
            username,
            password,
            database,
            ssl_mode,
            max_connections,
        } => {
            let store = if let Some(url) = url {
                tracing::info!("Connecting to PostgreSQL using connection URL");
                PostgresStore::from_url(url, *max_connections).await?
            } else if let (Some(host), Some(database)) = (host.as_ref(), database.as_ref()) {
                PostgresStore::from_params(
                    host,
                    port.unwrap_or(5432),
                    username.as_deref(),
                    password.as_deref(),
                    database,
                    *ssl_mode,
                    *max_connections,
                )
                .await?
            } else {
                return Err(MetadataError::Config(
                    "postgres config requires either 'url' or 'host' + 'database'".to_string(),
                ));
            };
            Ok(Arc::new(store) as Arc<dyn MetadataStore>)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blazedesk_core::config::MetadataConfig;

    #[tokio::test]
    async fn test_from_config_sqlite() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("metadata.db");
        let config = MetadataConfig::Sqlite {
            path: db_path.clone(),
        };

        let store = from_config(&config).await.unwrap();
        store.health_check().await.unwrap();
        assert!(db_path.exists());
    }

    #[tokio::test]
    async fn test_from_config_rejects_incomplete_postgres() {
        let config = MetadataConfig::Postgres {
            url: None,
            host: Some("localhost".to_string()),
            port: None,
            username: None,
            password: None,
            database: None,
            ssl_mode: None,
            max_connections: 1,
        };

        match from_config(&config).await {
            Ok(_) => panic!("expected config error"),
            Err(MetadataError::Config(msg)) => assert!(msg.contains("database")),
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }
}
