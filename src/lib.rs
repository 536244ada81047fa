//! greedy-build - build tool for the sass-greedy grid library
//!
//! Concatenates the library's `.scss` sources, in a fixed pattern order, into
//! a single distributable partial with a version/author banner, after wiping
//! the output directory.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    BundleOptions, BundleResult, BundleUseCase, CleanResult, CleanUseCase, Pipeline,
    PipelineResult,
};
pub use config::Config;
pub use domain::services::{HeaderTemplate, DEFAULT_HEADER};
pub use domain::value_objects::{BuildMetadata, GlobPatternList, OutputTarget};
pub use error::{GreedyError, GreedyResult};
pub use infrastructure::{LocalFs, PackageManifest};
