//! Connection-check targets.

use crate::error::{Error, Result};

/// A Blazegraph instance and namespace to probe for reachability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionTarget {
    pub ip_address: String,
    pub port: String,
    pub database_type: String,
}

impl ConnectionTarget {
    /// Build a target, rejecting missing or empty fields.
    pub fn new(
        ip_address: Option<String>,
        port: Option<String>,
        database_type: Option<String>,
    ) -> Result<Self> {
        Ok(Self {
            ip_address: required(ip_address, "ipAddress")?,
            port: required(port, "port")?,
            database_type: required(database_type, "databaseType")?,
        })
    }

    /// SPARQL endpoint of the target namespace.
    pub fn sparql_url(&self) -> String {
        format!(
            "http://{}:{}/blazegraph/namespace/{}/sparql",
            self.ip_address, self.port, self.database_type
        )
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::MissingField(field)),
    }
}
