//! Build pipeline
//!
//! Two independently callable stages plus the composite `run`, which never
//! starts bundling unless cleaning succeeded.

use crate::domain::ports::{FileSystem, MetadataSource};
use crate::error::GreedyResult;

use super::bundle::{BundleOptions, BundleResult, BundleUseCase};
use super::clean::{CleanResult, CleanUseCase};

/// Outcome of a full clean + build run
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub clean: CleanResult,
    pub bundle: BundleResult,
}

/// Explicit composition of the clean and bundle stages
pub struct Pipeline<FS, MS>
where
    FS: FileSystem,
    MS: MetadataSource,
{
    cleaner: CleanUseCase<FS>,
    bundler: BundleUseCase<FS, MS>,
    options: BundleOptions,
}

impl<FS, MS> Pipeline<FS, MS>
where
    FS: FileSystem + Clone,
    MS: MetadataSource,
{
    pub fn new(fs: FS, metadata: MS, options: BundleOptions) -> Self {
        Self {
            cleaner: CleanUseCase::new(fs.clone()),
            bundler: BundleUseCase::new(fs, metadata),
            options,
        }
    }

    pub fn options(&self) -> &BundleOptions {
        &self.options
    }

    /// Remove the output directory
    pub fn clean(&self) -> GreedyResult<CleanResult> {
        let target = self.options.resolved_target();
        self.cleaner.execute(&self.options.root, target.dir())
    }

    /// Write the bundle
    pub fn build(&self) -> GreedyResult<BundleResult> {
        self.bundler.execute(&self.options)
    }

    /// Clean, then build
    pub fn run(&self) -> GreedyResult<PipelineResult> {
        let clean = self.clean()?;
        let bundle = self.build()?;
        Ok(PipelineResult { clean, bundle })
    }
}
