//! Core domain types for the Blazedesk triple-store backend.
//!
//! This crate defines the data shared by the server and its collaborators:
//! - Application configuration
//! - Namespace property payloads sent to Blazegraph
//! - Namespace descriptors and active-namespace selection
//! - Connection-check targets

pub mod config;
pub mod connection;
pub mod error;
pub mod namespace;

pub use connection::ConnectionTarget;
pub use error::{Error, Result};
pub use namespace::{
    DatabaseProperties, NAMESPACE_PROPERTY, NamespaceDescriptor, NamespaceProperties,
    NamespaceRole,
};

/// Default maximum upload size: 100 MiB
pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 100 * 1024 * 1024;
