//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (local disk, in-memory mock for tests)
//! - `manifest` - `package.json` metadata source

pub mod fs;
pub mod manifest;

// Re-export for convenience
pub use fs::LocalFs;
pub use manifest::PackageManifest;
