//! Triple-store trait definitions.

use crate::error::TripleStoreResult;
use async_trait::async_trait;
use blazedesk_core::{ConnectionTarget, NamespaceDescriptor, NamespaceProperties};
use bytes::Bytes;

/// Status and body of a completed upstream call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Exactly 200 OK.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Operations this backend performs against the triple-store.
///
/// Each method issues exactly one HTTP request. Implementations fail only
/// on transport or decoding problems; status interpretation is left to the
/// caller, except for [`TripleStore::list_namespaces`] which needs a 2xx
/// body to decode.
#[async_trait]
pub trait TripleStore: Send + Sync {
    /// Create a top-level namespace with the fixed database property set.
    async fn create_database(&self, namespace: &str) -> TripleStoreResult<UpstreamResponse>;

    /// Create a namespace from caller-supplied properties.
    async fn create_namespace(
        &self,
        namespace: &str,
        properties: &NamespaceProperties,
    ) -> TripleStoreResult<UpstreamResponse>;

    /// Probe the SPARQL endpoint of an arbitrary Blazegraph instance.
    async fn check_connection(
        &self,
        target: &ConnectionTarget,
    ) -> TripleStoreResult<UpstreamResponse>;

    /// Fetch the namespace listing in the order the service returns it.
    async fn list_namespaces(&self) -> TripleStoreResult<Vec<NamespaceDescriptor>>;

    /// Forward turtle data to the ingestion endpoint.
    async fn ingest_turtle(&self, data: Bytes) -> TripleStoreResult<UpstreamResponse>;
}
