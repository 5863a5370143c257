//! Configuration types shared across crates.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// HTTP server configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Maximum accepted request body size in bytes (applies to turtle uploads).
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size: usize,
    /// Enable the /metrics endpoint for Prometheus scraping (default: true).
    #[serde(default = "default_metrics_enabled")]
    pub metrics_enabled: bool,
    /// Origins allowed to call the API from a browser. Empty disables CORS.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

fn default_bind() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_max_upload_size() -> usize {
    crate::DEFAULT_MAX_UPLOAD_SIZE
}

fn default_metrics_enabled() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_upload_size: default_max_upload_size(),
            metrics_enabled: default_metrics_enabled(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

/// PostgreSQL SSL mode configuration.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PgSslMode {
    /// Disable SSL/TLS entirely.
    Disable,
    /// Prefer SSL/TLS but allow unencrypted connections (default).
    #[default]
    Prefer,
    /// Require SSL/TLS for all connections.
    Require,
}

/// Metadata store configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MetadataConfig {
    /// SQLite database file.
    Sqlite {
        /// Database file path.
        path: PathBuf,
    },
    /// PostgreSQL database.
    Postgres {
        /// Connection URL. Takes precedence over individual fields if both are provided.
        url: Option<String>,
        /// Database host.
        host: Option<String>,
        /// Database port (default: 5432).
        #[serde(default = "default_pg_port")]
        port: Option<u16>,
        /// Database username.
        username: Option<String>,
        /// Database password.
        /// WARNING: Prefer BLAZEDESK_METADATA__PASSWORD over storing it in the config file.
        password: Option<String>,
        /// Database name.
        database: Option<String>,
        /// SSL mode for connections.
        ssl_mode: Option<PgSslMode>,
        /// Maximum connections in the pool.
        #[serde(default = "default_max_connections")]
        max_connections: u32,
    },
}

fn default_max_connections() -> u32 {
    10
}

fn default_pg_port() -> Option<u16> {
    Some(5432)
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self::Sqlite {
            path: PathBuf::from("./data/metadata.db"),
        }
    }
}

impl MetadataConfig {
    /// Validate metadata configuration invariants.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            MetadataConfig::Sqlite { .. } => Ok(()),
            MetadataConfig::Postgres {
                url,
                host,
                database,
                ..
            } => match (url.as_ref(), host.as_ref(), database.as_ref()) {
                (Some(_), _, _) => Ok(()),
                (None, Some(_), Some(_)) => Ok(()),
                (None, None, _) => Err(
                    "postgres config requires either 'url' or 'host' + 'database'".to_string(),
                ),
                (None, Some(_), None) => Err(
                    "postgres config requires 'database' when using individual fields".to_string(),
                ),
            },
        }
    }
}

/// External triple-store (Blazegraph) configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TripleStoreConfig {
    /// Base URL of the Blazegraph service, without trailing slash
    /// (e.g., "http://localhost:9999/blazegraph").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Endpoint that receives uploaded turtle files as `text/turtle` bodies.
    #[serde(default = "default_ingest_url")]
    pub ingest_url: String,
    /// Timeout applied to every outbound request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:9999/blazegraph".to_string()
}

fn default_ingest_url() -> String {
    "http://127.0.0.1:8000/api/".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for TripleStoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            ingest_url: default_ingest_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl TripleStoreConfig {
    /// Get the outbound request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate triple-store configuration invariants.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("triplestore.base_url cannot be empty".to_string());
        }
        if self.ingest_url.trim().is_empty() {
            return Err("triplestore.ingest_url cannot be empty".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("triplestore.request_timeout_secs cannot be 0".to_string());
        }
        Ok(())
    }
}

/// Complete application configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Metadata store configuration.
    #[serde(default)]
    pub metadata: MetadataConfig,
    /// Triple-store configuration.
    #[serde(default)]
    pub triplestore: TripleStoreConfig,
}

impl AppConfig {
    /// Create a test configuration with sensible defaults.
    ///
    /// **For testing only.** Uses SQLite metadata and the default Blazegraph URLs.
    pub fn for_testing() -> Self {
        Self::default()
    }

    /// Validate every section, returning the first error found.
    pub fn validate(&self) -> Result<(), String> {
        self.metadata.validate()?;
        self.triplestore.validate()
    }
}
