//! Output target value object

use std::path::{Component, Path, PathBuf};

use crate::error::{GreedyError, GreedyResult};

/// Where the bundle goes: a directory owned by the build, and a file inside it
///
/// The directory is relative to the project root and strictly below it, since
/// cleaning removes it recursively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    dir: PathBuf,
    file_name: String,
}

impl OutputTarget {
    /// Create a target, rejecting directories that are not strictly inside
    /// the project root and file names that would escape the directory
    pub fn new(dir: impl Into<PathBuf>, file_name: impl Into<String>) -> GreedyResult<Self> {
        let dir = normalize_dir(dir.into())?;

        let file_name = file_name.into();
        let invalid = file_name.is_empty()
            || file_name == "."
            || file_name == ".."
            || file_name.contains('/')
            || file_name.contains('\\');
        if invalid {
            return Err(GreedyError::InvalidFileName { name: file_name });
        }

        Ok(Self { dir, file_name })
    }

    /// Resolve the output directory against the project root
    pub fn resolve(&self, root: &Path) -> Self {
        Self {
            dir: root.join(&self.dir),
            file_name: self.file_name.clone(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Full path of the bundle file
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

/// Drop `.` components and refuse anything that is not a plain relative path
/// with at least one named component.
fn normalize_dir(raw: PathBuf) -> GreedyResult<PathBuf> {
    let unsafe_dir = |reason: &str| GreedyError::UnsafeOutputDir {
        path: raw.clone(),
        reason: reason.to_string(),
    };

    let mut dir = PathBuf::new();
    for component in raw.components() {
        match component {
            Component::Normal(part) => dir.push(part),
            Component::CurDir => {}
            Component::ParentDir => return Err(unsafe_dir("must not contain '..'")),
            Component::RootDir | Component::Prefix(_) => {
                return Err(unsafe_dir("must be relative to the project root"))
            }
        }
    }

    if dir.as_os_str().is_empty() {
        return Err(unsafe_dir("must not be the project root"));
    }
    Ok(dir)
}
