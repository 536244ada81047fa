//! In-memory file system for use case tests
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared between a
//! use case and the test that inspects it.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    pub dirs: Arc<Mutex<HashSet<PathBuf>>>,
    /// Files whose reads fail with permission denied
    pub unreadable: Arc<Mutex<HashSet<PathBuf>>>,
    /// Directories that refuse removal and writes
    pub locked: Arc<Mutex<HashSet<PathBuf>>>,
    /// Symlinks, resolved by `canonicalize` only
    pub links: Arc<Mutex<HashMap<PathBuf, PathBuf>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, registering its parent directories
    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files
            .lock()
            .unwrap()
            .insert(path, content.as_bytes().to_vec());
        self
    }

    pub fn with_unreadable(self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.lock().unwrap().insert(path.into());
        self
    }

    pub fn with_locked_dir(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.add_dir(&path);
        self.locked.lock().unwrap().insert(path);
        self
    }

    pub fn with_symlink(self, link: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        self.links.lock().unwrap().insert(link.into(), target.into());
        self
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    fn add_dir(&self, path: &Path) {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }
}

impl FileSystem for MockFileSystem {
    fn glob(&self, pattern: &str) -> FsResult<Vec<PathBuf>> {
        let matcher = glob::Pattern::new(pattern).map_err(|e| FsError::Pattern {
            pattern: pattern.to_string(),
            message: e.msg.to_string(),
        })?;
        let options = glob::MatchOptions {
            require_literal_separator: true,
            require_literal_leading_dot: true,
            ..glob::MatchOptions::new()
        };

        let files = self.files.lock().unwrap();
        Ok(files
            .keys()
            .filter(|path| matcher.matches_path_with(path, options))
            .cloned()
            .collect())
    }

    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        if self.unreadable.lock().unwrap().contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let parent = path.parent().unwrap_or(Path::new(""));
        if self.locked.lock().unwrap().contains(parent) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        if !parent.as_os_str().is_empty() && !self.is_dir(parent) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.is_dir(path) || self.files.lock().unwrap().contains_key(path)
    }

    fn canonicalize(&self, path: &Path) -> FsResult<PathBuf> {
        let mut resolved: PathBuf = path
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();
        for (link, target) in self.links.lock().unwrap().iter() {
            if let Ok(rest) = resolved.strip_prefix(link) {
                resolved = target.join(rest);
                break;
            }
        }
        Ok(resolved)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        if self.files.lock().unwrap().contains_key(path) {
            return Err(FsError::Io {
                path: path.to_path_buf(),
                source: io::Error::other("file exists"),
            });
        }
        self.add_dir(path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<bool> {
        if self.files.lock().unwrap().contains_key(path) {
            return Err(FsError::Io {
                path: path.to_path_buf(),
                source: io::Error::other("not a directory"),
            });
        }
        if self.locked.lock().unwrap().contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        if !self.is_dir(path) {
            return Ok(false);
        }

        self.files
            .lock()
            .unwrap()
            .retain(|file, _| !file.starts_with(path));
        self.dirs
            .lock()
            .unwrap()
            .retain(|dir| !dir.starts_with(path));
        Ok(true)
    }
}
