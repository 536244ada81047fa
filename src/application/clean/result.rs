//! Clean result types

use std::path::PathBuf;

/// Result of a clean operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanResult {
    /// Directory that was cleaned
    pub directory: PathBuf,
    /// Whether anything was actually removed
    pub removed: bool,
}

impl CleanResult {
    pub fn new(directory: PathBuf, removed: bool) -> Self {
        Self { directory, removed }
    }

    /// True when the directory did not exist to begin with
    pub fn was_already_clean(&self) -> bool {
        !self.removed
    }
}
