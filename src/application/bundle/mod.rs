//! Bundle Use Case
//!
//! This module handles:
//! - Expanding source patterns in declared order
//! - Reading every matched file
//! - Concatenating contents and prepending the rendered header
//! - Writing the bundle atomically into the output directory

mod options;
mod result;
mod use_case;

pub use options::BundleOptions;
pub use result::BundleResult;
pub use use_case::BundleUseCase;
