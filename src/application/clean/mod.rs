//! Clean Use Case
//!
//! Removes the output directory before a build so no stale files survive.
//! A directory that is already gone counts as clean.

mod result;
mod use_case;

pub use result::CleanResult;
pub use use_case::CleanUseCase;
