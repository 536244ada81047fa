//! Bundle Use Case
//!
//! match → read-all → concatenate → prepend header → write

use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::entities::SourceFile;
use crate::domain::ports::{FileSystem, FsError, MetadataSource};
use crate::domain::services::{assemble, concatenate};
use crate::domain::value_objects::ContentHash;
use crate::error::{GreedyError, GreedyResult};

use super::options::BundleOptions;
use super::result::BundleResult;

/// Bundle use case - builds the single distributable partial
pub struct BundleUseCase<FS, MS>
where
    FS: FileSystem,
    MS: MetadataSource,
{
    fs: FS,
    metadata: MS,
}

/// Ordered, de-duplicated matches plus the patterns that matched nothing
struct Resolved {
    files: Vec<PathBuf>,
    empty_patterns: Vec<String>,
}

impl<FS, MS> BundleUseCase<FS, MS>
where
    FS: FileSystem,
    MS: MetadataSource,
{
    /// Create a new bundle use case
    pub fn new(fs: FS, metadata: MS) -> Self {
        Self { fs, metadata }
    }

    /// Build the bundle and write it to the output target.
    ///
    /// Nothing is written unless every source was read; the write itself is
    /// atomic so a failed build leaves any previous bundle untouched.
    pub fn execute(&self, options: &BundleOptions) -> GreedyResult<BundleResult> {
        let metadata = self.metadata.load()?;
        let resolved = self.resolve(options)?;
        let sources = self.read_all(&resolved.files)?;

        let body = concatenate(&sources, options.separator.as_bytes());
        let header = options.header.render(&metadata);
        let buffer = assemble(&header, &body);

        let target = options.resolved_target();
        let output = target.path();
        self.fs
            .create_dir_all(target.dir())
            .map_err(|e| write_failed(target.dir().to_path_buf(), e))?;
        self.fs
            .write_atomic(&output, &buffer)
            .map_err(|e| write_failed(output.clone(), e))?;

        Ok(BundleResult {
            output,
            sources: resolved.files,
            empty_patterns: resolved.empty_patterns,
            bytes_written: buffer.len(),
            hash: ContentHash::from_bytes(&buffer),
            metadata,
        })
    }

    /// Expand patterns in declared order.
    ///
    /// Matches of one pattern are sorted lexically; a file already matched
    /// by an earlier pattern keeps its first position.
    fn resolve(&self, options: &BundleOptions) -> GreedyResult<Resolved> {
        let mut seen = HashSet::new();
        let mut files = Vec::new();
        let mut empty_patterns = Vec::new();

        for pattern in &options.patterns {
            let anchored = pattern.anchored(&options.root);
            let mut matches = self.fs.glob(&anchored).map_err(|e| match e {
                FsError::Pattern { message, .. } => GreedyError::InvalidPattern {
                    pattern: pattern.to_string(),
                    message,
                },
                other => read_failed(PathBuf::from(&anchored), other),
            })?;

            if matches.is_empty() {
                empty_patterns.push(pattern.to_string());
                continue;
            }

            matches.sort();
            for path in matches {
                if seen.insert(path.clone()) {
                    files.push(path);
                }
            }
        }

        Ok(Resolved {
            files,
            empty_patterns,
        })
    }

    fn read_all(&self, files: &[PathBuf]) -> GreedyResult<Vec<SourceFile>> {
        files
            .iter()
            .map(|path| {
                self.fs
                    .read(path)
                    .map(|content| SourceFile::new(path.clone(), content))
                    .map_err(|e| read_failed(path.clone(), e))
            })
            .collect()
    }
}

fn read_failed(fallback: PathBuf, err: FsError) -> GreedyError {
    let path = err.path().map(|p| p.to_path_buf()).unwrap_or(fallback);
    GreedyError::ReadFailed {
        path,
        source: err.into_io(),
    }
}

fn write_failed(path: PathBuf, err: FsError) -> GreedyError {
    GreedyError::WriteFailed {
        path,
        source: err.into_io(),
    }
}
