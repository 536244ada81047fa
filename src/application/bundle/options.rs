//! Bundle options

use std::path::PathBuf;

use crate::domain::services::HeaderTemplate;
use crate::domain::value_objects::{GlobPatternList, OutputTarget};

/// Everything the bundler needs besides metadata
#[derive(Debug, Clone)]
pub struct BundleOptions {
    /// Project root that relative patterns and the output directory hang off
    pub root: PathBuf,
    /// Source patterns, in concatenation order
    pub patterns: GlobPatternList,
    /// Output directory and file name
    pub target: OutputTarget,
    /// Banner template
    pub header: HeaderTemplate,
    /// Placed between files; empty by default
    pub separator: String,
}

impl BundleOptions {
    /// Create options with the default header and no separator
    pub fn new(root: impl Into<PathBuf>, patterns: GlobPatternList, target: OutputTarget) -> Self {
        Self {
            root: root.into(),
            patterns,
            target,
            header: HeaderTemplate::default(),
            separator: String::new(),
        }
    }

    /// Set header template
    pub fn with_header(mut self, header: HeaderTemplate) -> Self {
        self.header = header;
        self
    }

    /// Set separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Output target resolved against the root
    pub fn resolved_target(&self) -> OutputTarget {
        self.target.resolve(&self.root)
    }
}
