//! Client abstraction for the external Blazegraph triple-store.
//!
//! This crate provides:
//! - The [`TripleStore`] trait, one method per remote operation
//! - [`BlazegraphClient`], its reqwest-backed implementation

pub mod blazegraph;
pub mod error;
pub mod traits;

pub use blazegraph::BlazegraphClient;
pub use error::{TripleStoreError, TripleStoreResult};
pub use traits::{TripleStore, UpstreamResponse};

use blazedesk_core::config::TripleStoreConfig;
use std::sync::Arc;

/// Create a triple-store client from configuration.
pub fn from_config(config: &TripleStoreConfig) -> TripleStoreResult<Arc<dyn TripleStore>> {
    config.validate().map_err(TripleStoreError::Config)?;
    let client = BlazegraphClient::new(config)?;
    Ok(Arc::new(client))
}
