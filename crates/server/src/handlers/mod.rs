//! HTTP request handlers.

pub mod active;
pub mod common;
pub mod connection;
pub mod files;
pub mod home;
pub mod namespaces;
pub mod uploads;

pub use active::*;
pub use common::*;
pub use connection::*;
pub use files::*;
pub use home::*;
pub use namespaces::*;
pub use uploads::*;
