//! Clean Use Case
//!
//! Orchestrates removal of the output directory.

use std::path::{Path, PathBuf};

use crate::domain::ports::{FileSystem, FsError};
use crate::error::{GreedyError, GreedyResult};

use super::result::CleanResult;

/// Clean use case - removes the output directory recursively
pub struct CleanUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> CleanUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new clean use case
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Remove `dir` and all its contents.
    ///
    /// `dir` must resolve strictly inside `root`; the project root itself, its
    /// ancestors and anything outside it are refused with `UnsafeOutputDir`
    /// before a single file is touched. Succeeds without doing anything if
    /// `dir` does not exist. Any other failure is returned as `CleanFailed`
    /// and must stop the pipeline.
    pub fn execute(&self, root: &Path, dir: &Path) -> GreedyResult<CleanResult> {
        if !self.ensure_inside_root(root, dir)? {
            return Ok(CleanResult::new(dir.to_path_buf(), false));
        }

        let removed = self
            .fs
            .remove_dir_all(dir)
            .map_err(|e| GreedyError::CleanFailed {
                path: dir.to_path_buf(),
                source: e.into_io(),
            })?;

        // Removal must be confirmed before a build is allowed to write here
        if self.fs.exists(dir) {
            return Err(GreedyError::CleanFailed {
                path: dir.to_path_buf(),
                source: std::io::Error::other("directory still present after removal"),
            });
        }

        Ok(CleanResult::new(dir.to_path_buf(), removed))
    }

    /// Check containment on the real locations of `root` and `dir`'s parent.
    ///
    /// The last component is not resolved, so a symlink named like the output
    /// directory is judged by where it sits, not where it points. Returns
    /// `Ok(false)` when the parent does not exist, i.e. nothing to remove.
    fn ensure_inside_root(&self, root: &Path, dir: &Path) -> GreedyResult<bool> {
        let unsafe_dir = |reason: &str| GreedyError::UnsafeOutputDir {
            path: dir.to_path_buf(),
            reason: reason.to_string(),
        };

        let name = dir
            .file_name()
            .ok_or_else(|| unsafe_dir("must name a directory inside the project root"))?;
        let parent = match dir.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let root = self.canonical(root)?;
        let parent = match self.fs.canonicalize(parent) {
            Ok(parent) => parent,
            Err(FsError::NotFound(_)) => return Ok(false),
            Err(e) => {
                return Err(GreedyError::CleanFailed {
                    path: dir.to_path_buf(),
                    source: e.into_io(),
                })
            }
        };

        let candidate = parent.join(name);
        if candidate == root || !candidate.starts_with(&root) {
            return Err(unsafe_dir("must stay inside the project root"));
        }
        Ok(true)
    }

    fn canonical(&self, root: &Path) -> GreedyResult<PathBuf> {
        self.fs
            .canonicalize(root)
            .map_err(|e| GreedyError::CleanFailed {
                path: root.to_path_buf(),
                source: e.into_io(),
            })
    }
}
