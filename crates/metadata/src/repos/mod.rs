//! Repository traits for metadata operations.

pub mod uploaded_files;

pub use uploaded_files::UploadedFileRepo;
