//! reqwest-backed Blazegraph client.

use crate::error::{TripleStoreError, TripleStoreResult};
use crate::traits::{TripleStore, UpstreamResponse};
use async_trait::async_trait;
use blazedesk_core::config::TripleStoreConfig;
use blazedesk_core::{ConnectionTarget, DatabaseProperties, NamespaceDescriptor, NamespaceProperties};
use bytes::Bytes;
use reqwest::Url;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

/// Blazegraph REST client.
#[derive(Clone)]
pub struct BlazegraphClient {
    http: reqwest::Client,
    base_url: Url,
    ingest_url: Url,
}

impl BlazegraphClient {
    pub fn new(config: &TripleStoreConfig) -> TripleStoreResult<Self> {
        let base_url = parse_url(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(TripleStoreError::InvalidUrl(format!(
                "base URL cannot carry a path: {}",
                config.base_url
            )));
        }
        let ingest_url = parse_url(&config.ingest_url)?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            base_url,
            ingest_url,
        })
    }

    /// `{base_url}/namespace[/{namespace}]`, with the namespace percent-encoded.
    fn namespace_url(&self, namespace: Option<&str>) -> TripleStoreResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                TripleStoreError::InvalidUrl(format!("base URL cannot carry a path: {}", self.base_url))
            })?;
            segments.pop_if_empty().push("namespace");
            if let Some(namespace) = namespace {
                segments.push(namespace);
            }
        }
        Ok(url)
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> TripleStoreResult<UpstreamResponse> {
        let response = req.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(UpstreamResponse { status, body })
    }
}

fn parse_url(raw: &str) -> TripleStoreResult<Url> {
    Url::parse(raw).map_err(|e| TripleStoreError::InvalidUrl(format!("{raw}: {e}")))
}

#[async_trait]
impl TripleStore for BlazegraphClient {
    async fn create_database(&self, namespace: &str) -> TripleStoreResult<UpstreamResponse> {
        let url = self.namespace_url(Some(namespace))?;
        tracing::debug!(%url, namespace, "Creating database");
        self.send(self.http.post(url).json(&DatabaseProperties::default()))
            .await
    }

    async fn create_namespace(
        &self,
        namespace: &str,
        properties: &NamespaceProperties,
    ) -> TripleStoreResult<UpstreamResponse> {
        let url = self.namespace_url(None)?;
        let payload = properties.render(namespace);
        tracing::debug!(%url, payload = %payload, "Creating namespace");

        let response = self
            .send(
                self.http
                    .post(url)
                    .header(CONTENT_TYPE, "text/plain")
                    .body(payload),
            )
            .await?;

        tracing::debug!(
            status = response.status,
            body = %response.body,
            "Namespace creation response"
        );
        Ok(response)
    }

    async fn check_connection(
        &self,
        target: &ConnectionTarget,
    ) -> TripleStoreResult<UpstreamResponse> {
        let url = parse_url(&target.sparql_url())?;
        tracing::debug!(%url, "Probing SPARQL endpoint");
        self.send(self.http.get(url)).await
    }

    async fn list_namespaces(&self) -> TripleStoreResult<Vec<NamespaceDescriptor>> {
        let url = self.namespace_url(None)?;
        let response = self
            .send(self.http.get(url).header(ACCEPT, "application/json"))
            .await?;

        if !(200..300).contains(&response.status) {
            return Err(TripleStoreError::UnexpectedStatus {
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| TripleStoreError::Decode(e.to_string()))
    }

    async fn ingest_turtle(&self, data: Bytes) -> TripleStoreResult<UpstreamResponse> {
        tracing::debug!(url = %self.ingest_url, bytes = data.len(), "Forwarding turtle data");
        self.send(
            self.http
                .post(self.ingest_url.clone())
                .header(CONTENT_TYPE, "text/turtle")
                .body(data),
        )
        .await
    }
}
