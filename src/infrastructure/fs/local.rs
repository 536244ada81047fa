//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// `*` and `?` never cross a path separator or match a leading dot
const MATCH_OPTIONS: glob::MatchOptions = glob::MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Local file system implementation
///
/// Provides glob expansion, atomic writes and recursive directory removal.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn glob(&self, pattern: &str) -> FsResult<Vec<PathBuf>> {
        let entries = glob::glob_with(pattern, MATCH_OPTIONS).map_err(|e| FsError::Pattern {
            pattern: pattern.to_string(),
            message: e.msg.to_string(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| {
                let path = e.path().to_path_buf();
                FsError::from_io(&path, e.into_error())
            })?;
            if path.is_file() {
                files.push(path);
            }
        }
        Ok(files)
    }

    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // Temp file lives next to the target so the rename stays on one filesystem
        let mut tmp = tempfile::Builder::new()
            .prefix(".greedy-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| FsError::from_io(path, e))?;

        tmp.write_all(content)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| FsError::from_io(path, e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o644))
                .map_err(|e| FsError::from_io(path, e))?;
        }

        tmp.persist(path).map_err(|e| FsError::from_io(path, e.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn canonicalize(&self, path: &Path) -> FsResult<PathBuf> {
        std::fs::canonicalize(path).map_err(|e| FsError::from_io(path, e))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<bool> {
        let meta = match std::fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(FsError::from_io(path, e)),
        };

        if meta.file_type().is_symlink() {
            // Drop the link, never what it points at
            std::fs::remove_file(path).map_err(|e| FsError::from_io(path, e))?;
            return Ok(true);
        }

        if !meta.is_dir() {
            return Err(FsError::Io {
                path: path.to_path_buf(),
                source: io::Error::other("not a directory"),
            });
        }

        match std::fs::remove_dir_all(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(FsError::from_io(path, e)),
        }
    }
}
