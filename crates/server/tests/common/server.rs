//! Server test utilities.

use super::triplestore::MockTripleStore;
use blazedesk_core::config::{AppConfig, MetadataConfig};
use blazedesk_metadata::{MetadataStore, SqliteStore};
use blazedesk_server::{AppState, create_router};
use blazedesk_triplestore::TripleStore;
use std::sync::Arc;
use tempfile::TempDir;

/// A test server wrapper with all dependencies.
/// Note: #[allow(dead_code)] because each test file compiles common/ separately.
#[allow(dead_code)]
pub struct TestServer {
    pub router: axum::Router,
    pub state: AppState,
    /// Recording triple-store; only wired in when no real client was given.
    pub triplestore: Arc<MockTripleStore>,
    _temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestServer {
    /// Create a test server backed by a temporary SQLite store and a mock triple-store.
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Create a test server with custom config modifications.
    pub async fn with_config<F>(modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        Self::build(modifier, false).await
    }

    /// Create a test server that talks to a real Blazegraph client built from
    /// the (modified) triple-store config.
    pub async fn with_blazegraph<F>(modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        Self::build(modifier, true).await
    }

    async fn build<F>(modifier: F, real_client: bool) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");

        let db_path = temp_dir.path().join("metadata.db");
        let metadata: Arc<dyn MetadataStore> = Arc::new(
            SqliteStore::new(&db_path)
                .await
                .expect("Failed to create metadata store"),
        );

        let mut config = AppConfig::for_testing();
        config.metadata = MetadataConfig::Sqlite { path: db_path };
        modifier(&mut config);

        let mock = Arc::new(MockTripleStore::new());
        let triplestore: Arc<dyn TripleStore> = if real_client {
            blazedesk_triplestore::from_config(&config.triplestore)
                .expect("Failed to create triple-store client")
        } else {
            mock.clone()
        };

        let state = AppState::new(config, metadata, triplestore);
        let router = create_router(state.clone());

        Self {
            router,
            state,
            triplestore: mock,
            _temp_dir: temp_dir,
        }
    }

    /// Get access to the underlying metadata.
    pub fn metadata(&self) -> Arc<dyn MetadataStore> {
        self.state.metadata.clone()
    }
}
