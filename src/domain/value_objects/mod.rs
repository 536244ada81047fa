//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod build_metadata;
mod glob_patterns;
mod hash;
mod output_target;

pub use build_metadata::BuildMetadata;
pub use glob_patterns::{GlobPattern, GlobPatternList};
pub use hash::ContentHash;
pub use output_target::OutputTarget;
