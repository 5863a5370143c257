//! HTTP backend for managing a Blazegraph triple-store.
//!
//! This crate provides the HTTP surface:
//! - Uploaded file listing
//! - Database and namespace creation
//! - Turtle upload with metadata recording
//! - Connection checks and active namespace lookup
//! - Health and Prometheus metrics endpoints

pub mod error;
pub mod handlers;
pub mod metrics;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
