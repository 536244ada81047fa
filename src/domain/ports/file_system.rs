//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the use cases to touch the disk without depending on
//! concrete implementations (local, in-memory mock).

use std::io;
use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Any other I/O error, with the path it happened on
    Io { path: PathBuf, source: io::Error },
    /// Glob pattern rejected by the matcher
    Pattern { pattern: String, message: String },
}

impl FsError {
    /// Classify an I/O error raised while operating on `path`
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Path the error happened on, if it concerns one
    pub fn path(&self) -> Option<&Path> {
        match self {
            FsError::NotFound(path) | FsError::PermissionDenied(path) => Some(path),
            FsError::Io { path, .. } => Some(path),
            FsError::Pattern { .. } => None,
        }
    }

    /// Convert back into an `io::Error`, keeping the error kind
    pub fn into_io(self) -> io::Error {
        match self {
            FsError::NotFound(_) => io::Error::new(io::ErrorKind::NotFound, "no such file"),
            FsError::PermissionDenied(_) => {
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied")
            }
            FsError::Io { source, .. } => source,
            FsError::Pattern { message, .. } => io::Error::new(io::ErrorKind::InvalidInput, message),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io { path, source } => write!(f, "I/O error on {}: {}", path.display(), source),
            FsError::Pattern { pattern, message } => {
                write!(f, "Invalid pattern '{}': {}", pattern, message)
            }
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Expand a glob pattern to the regular files it matches.
    ///
    /// No ordering is guaranteed; callers sort.
    fn glob(&self, pattern: &str) -> FsResult<Vec<PathBuf>>;

    /// Read the full file content, byte for byte
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Write content to file atomically (temp file + rename)
    fn write_atomic(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Absolute path with every symlink resolved; the path must exist
    fn canonicalize(&self, path: &Path) -> FsResult<PathBuf>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory and everything below it.
    ///
    /// Returns `Ok(false)` when the directory did not exist.
    fn remove_dir_all(&self, path: &Path) -> FsResult<bool>;
}
