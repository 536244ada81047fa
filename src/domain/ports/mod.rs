//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod metadata_source;

pub use file_system::{FileSystem, FsError, FsResult};
pub use metadata_source::MetadataSource;
