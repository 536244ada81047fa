//! Bundle result types

use std::path::PathBuf;

use crate::domain::value_objects::{BuildMetadata, ContentHash};

/// Result of a bundle operation
#[derive(Debug, Clone)]
pub struct BundleResult {
    /// Path of the written bundle
    pub output: PathBuf,
    /// Source files in concatenation order
    pub sources: Vec<PathBuf>,
    /// Patterns that matched no files
    pub empty_patterns: Vec<String>,
    /// Size of the bundle including the header
    pub bytes_written: usize,
    /// SHA-256 of the bundle
    pub hash: ContentHash,
    /// Metadata the header was rendered with
    pub metadata: BuildMetadata,
}

impl BundleResult {
    /// Whether any pattern came up empty
    pub fn has_warnings(&self) -> bool {
        !self.empty_patterns.is_empty()
    }
}
