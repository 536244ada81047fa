pub mod build;
pub mod clean;
pub mod config;

use std::path::Path;

/// Show `path` relative to the project root when it lives under it
pub(crate) fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .ok()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(path)
        .display()
        .to_string()
}
