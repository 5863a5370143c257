//! Recording triple-store mock.

use async_trait::async_trait;
use blazedesk_core::{ConnectionTarget, NamespaceDescriptor, NamespaceProperties};
use blazedesk_triplestore::{TripleStore, TripleStoreError, TripleStoreResult, UpstreamResponse};
use bytes::Bytes;
use std::sync::Mutex;

/// One outbound call as seen by the mock.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateDatabase(String),
    CreateNamespace { namespace: String, payload: String },
    CheckConnection(String),
    ListNamespaces,
    IngestTurtle(Vec<u8>),
}

/// What the mock answers with.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum Reply {
    Status(u16, String),
    Fail(String),
}

/// In-memory triple-store that records every call and answers with
/// programmable replies.
#[allow(dead_code)]
pub struct MockTripleStore {
    calls: Mutex<Vec<Call>>,
    reply: Mutex<Reply>,
    namespaces: Mutex<Result<Vec<NamespaceDescriptor>, String>>,
}

#[allow(dead_code)]
impl MockTripleStore {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Mutex::new(Reply::Status(200, String::new())),
            namespaces: Mutex::new(Ok(Vec::new())),
        }
    }

    /// Set the reply used by create/probe/ingest calls.
    pub fn reply_with(&self, reply: Reply) {
        *self.reply.lock().unwrap() = reply;
    }

    /// Set the namespace listing from a JSON array.
    pub fn set_namespaces(&self, listing: serde_json::Value) {
        let parsed = serde_json::from_value(listing).expect("listing must be an array of objects");
        *self.namespaces.lock().unwrap() = Ok(parsed);
    }

    /// Make the namespace listing fail.
    pub fn fail_namespaces(&self, message: &str) {
        *self.namespaces.lock().unwrap() = Err(message.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn respond(&self) -> TripleStoreResult<UpstreamResponse> {
        match self.reply.lock().unwrap().clone() {
            Reply::Status(status, body) => Ok(UpstreamResponse::new(status, body)),
            Reply::Fail(message) => Err(TripleStoreError::Decode(message)),
        }
    }
}

#[async_trait]
impl TripleStore for MockTripleStore {
    async fn create_database(&self, namespace: &str) -> TripleStoreResult<UpstreamResponse> {
        self.record(Call::CreateDatabase(namespace.to_string()));
        self.respond()
    }

    async fn create_namespace(
        &self,
        namespace: &str,
        properties: &NamespaceProperties,
    ) -> TripleStoreResult<UpstreamResponse> {
        self.record(Call::CreateNamespace {
            namespace: namespace.to_string(),
            payload: properties.render(namespace),
        });
        self.respond()
    }

    async fn check_connection(
        &self,
        target: &ConnectionTarget,
    ) -> TripleStoreResult<UpstreamResponse> {
        self.record(Call::CheckConnection(target.sparql_url()));
        self.respond()
    }

    async fn list_namespaces(&self) -> TripleStoreResult<Vec<NamespaceDescriptor>> {
        self.record(Call::ListNamespaces);
        self.namespaces
            .lock()
            .unwrap()
            .clone()
            .map_err(|message| TripleStoreError::UnexpectedStatus {
                status: 503,
                body: message,
            })
    }

    async fn ingest_turtle(&self, data: Bytes) -> TripleStoreResult<UpstreamResponse> {
        self.record(Call::IngestTurtle(data.to_vec()));
        self.respond()
    }
}
