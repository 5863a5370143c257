//! Application state shared across handlers.

use blazedesk_core::config::AppConfig;
use blazedesk_metadata::MetadataStore;
use blazedesk_triplestore::TripleStore;
use std::sync::Arc;

/// Shared application state.
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Uploaded-file metadata store.
    pub metadata: Arc<dyn MetadataStore>,
    /// External triple-store client.
    pub triplestore: Arc<dyn TripleStore>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        config: AppConfig,
        metadata: Arc<dyn MetadataStore>,
        triplestore: Arc<dyn TripleStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            metadata,
            triplestore,
        }
    }
}
