//! Application Layer
//!
//! Use cases that orchestrate the build flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CleanUseCase` - Removes the output directory
//! - `BundleUseCase` - Match, read, concatenate, prepend header, write
//! - `Pipeline` - Runs clean then bundle

pub mod bundle;
pub mod clean;
pub mod pipeline;

pub use bundle::{BundleOptions, BundleResult, BundleUseCase};
pub use clean::{CleanResult, CleanUseCase};
pub use pipeline::{Pipeline, PipelineResult};
