//! Namespace payloads and descriptors exchanged with Blazegraph.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Property that binds a property block to its namespace.
pub const NAMESPACE_PROPERTY: &str = "com.bigdata.rdf.sail.namespace";

/// Caller-supplied namespace configuration, kept in request order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceProperties(IndexMap<String, Value>);

impl NamespaceProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render the plain-text payload Blazegraph expects when creating a namespace.
    ///
    /// One `key=value` line per property in insertion order, followed by the
    /// line binding [`NAMESPACE_PROPERTY`] to `namespace`. Lines are joined by
    /// `\n` with no trailing newline. String values are written raw; any other
    /// JSON value is written as its JSON text.
    pub fn render(&self, namespace: &str) -> String {
        let mut lines: Vec<String> = self
            .0
            .iter()
            .map(|(key, value)| format!("{key}={}", render_value(value)))
            .collect();
        lines.push(format!("{NAMESPACE_PROPERTY}={namespace}"));
        lines.join("\n")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for NamespaceProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Fixed property set used when creating a top-level database.
#[derive(Clone, Debug, Serialize)]
pub struct DatabaseProperties {
    properties: IndexMap<&'static str, &'static str>,
}

impl Default for DatabaseProperties {
    fn default() -> Self {
        let properties = IndexMap::from([
            (
                "com.bigdata.rdf.store.DataLoader",
                "com.bigdata.rdf.data.RDFDataLoader",
            ),
            (
                "com.bigdata.rdf.store.DataLoader.context",
                "com.bigdata.rdf.data.RDFDataLoaderContext",
            ),
            ("com.bigdata.rdf.sail.isolates", "true"),
            ("com.bigdata.rdf.sail.quads", "true"),
            ("com.bigdata.rdf.sail.axioms", "true"),
            ("com.bigdata.rdf.sail.includeInferred", "true"),
            ("com.bigdata.rdf.sail.incremental", "false"),
        ]);
        Self { properties }
    }
}

impl DatabaseProperties {
    /// Look up a single property value.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.properties.get(key).copied()
    }
}

/// A namespace entry from the Blazegraph namespace listing.
///
/// The object is kept opaque and echoed back unchanged; only `isDefault`
/// is interpreted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceDescriptor(Map<String, Value>);

impl NamespaceDescriptor {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// True only when `isDefault` is the JSON boolean `true`.
    ///
    /// This is stricter than a truthiness test: `"true"`, `1` or any other
    /// non-boolean value does not mark a namespace as default, so such an
    /// entry is treated as a repository.
    pub fn is_default(&self) -> bool {
        matches!(self.0.get("isDefault"), Some(Value::Bool(true)))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Which namespace an "active" lookup is after.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamespaceRole {
    /// First namespace flagged `isDefault: true`.
    Database,
    /// First namespace not flagged `isDefault: true`.
    Repository,
}

impl NamespaceRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Repository => "repository",
        }
    }

    pub fn matches(self, descriptor: &NamespaceDescriptor) -> bool {
        match self {
            Self::Database => descriptor.is_default(),
            Self::Repository => !descriptor.is_default(),
        }
    }

    /// Pick the first descriptor with this role, in listing order.
    pub fn select(
        self,
        descriptors: impl IntoIterator<Item = NamespaceDescriptor>,
    ) -> Option<NamespaceDescriptor> {
        descriptors.into_iter().find(|d| self.matches(d))
    }
}

impl fmt::Display for NamespaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
