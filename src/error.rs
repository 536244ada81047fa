//! Error types for greedy-build
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for greedy-build operations
pub type GreedyResult<T> = Result<T, GreedyError>;

/// Main error type for greedy-build operations
#[derive(Error, Debug)]
pub enum GreedyError {
    /// Output directory exists but could not be removed
    #[error("failed to clean {path}: {source}")]
    CleanFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A matched source file could not be read
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output directory could not be created or the bundle could not be written
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Glob pattern could not be parsed
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Output file name is not a plain file name
    #[error("invalid output file name '{name}' - expected a plain file name")]
    InvalidFileName { name: String },

    /// Output directory is the project root, an ancestor of it, or outside it
    #[error("unsafe output directory {path}: {reason}")]
    UnsafeOutputDir { path: PathBuf, reason: String },

    /// Package manifest could not be read
    #[error("cannot read package manifest {path}: {source}")]
    ManifestUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Package manifest is not valid JSON or has the wrong shape
    #[error("invalid package manifest {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    /// Package manifest lacks a field the header needs
    #[error("package manifest {path} is missing required field '{field}'")]
    MissingManifestField { path: PathBuf, field: String },

    /// greedy.toml could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GreedyError {
    /// Path the error refers to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            GreedyError::CleanFailed { path, .. }
            | GreedyError::ReadFailed { path, .. }
            | GreedyError::WriteFailed { path, .. }
            | GreedyError::ManifestUnreadable { path, .. }
            | GreedyError::InvalidManifest { path, .. }
            | GreedyError::MissingManifestField { path, .. }
            | GreedyError::UnsafeOutputDir { path, .. } => Some(path),
            GreedyError::InvalidConfig { file, .. } => Some(file),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display_clean_failed() {
        let err = GreedyError::CleanFailed {
            path: PathBuf::from("dist"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(err.to_string(), "failed to clean dist: permission denied");
    }

    #[test]
    fn test_error_display_missing_field() {
        let err = GreedyError::MissingManifestField {
            path: PathBuf::from("package.json"),
            field: "version".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "package manifest package.json is missing required field 'version'"
        );
    }

    #[test]
    fn test_error_path_points_at_offending_file() {
        let err = GreedyError::ReadFailed {
            path: PathBuf::from("src/_grid.scss"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.path(), Some(std::path::Path::new("src/_grid.scss")));

        let err = GreedyError::InvalidPattern {
            pattern: "[".to_string(),
            message: "bad".to_string(),
        };
        assert!(err.path().is_none());
    }

    #[test]
    fn test_error_display_unsafe_output_dir() {
        let err = GreedyError::UnsafeOutputDir {
            path: PathBuf::from(".."),
            reason: "must stay inside the project root".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsafe output directory ..: must stay inside the project root"
        );
        assert_eq!(err.path(), Some(std::path::Path::new("..")));
    }
}
