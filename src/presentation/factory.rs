//! Use Case Factory
//!
//! Creates the pipeline with its infrastructure dependencies from a loaded
//! configuration.

use std::path::Path;

use crate::application::{BundleOptions, Pipeline};
use crate::config::Config;
use crate::domain::services::HeaderTemplate;
use crate::domain::value_objects::{GlobPatternList, OutputTarget};
use crate::error::GreedyResult;
use crate::infrastructure::{LocalFs, PackageManifest};

/// Translate configuration into bundle options rooted at `root`
pub fn bundle_options(root: &Path, config: &Config) -> GreedyResult<BundleOptions> {
    let build = &config.build;
    let patterns = GlobPatternList::new(build.patterns.iter().cloned())?;
    let target = OutputTarget::new(build.output_dir.clone(), build.file_name.clone())?;

    Ok(BundleOptions::new(root, patterns, target)
        .with_header(HeaderTemplate::new(build.header.clone()))
        .with_separator(build.separator.clone()))
}

/// Create the local-disk pipeline, reading metadata from the configured manifest
pub fn create_pipeline(
    root: &Path,
    config: &Config,
) -> GreedyResult<Pipeline<LocalFs, PackageManifest>> {
    let options = bundle_options(root, config)?;
    let manifest = PackageManifest::new(root.join(&config.build.manifest));
    Ok(Pipeline::new(LocalFs::new(), manifest, options))
}
