//! Domain Services
//!
//! Stateless transformations used by the bundle use case.

mod bundler;
mod header;

pub use bundler::{assemble, concatenate};
pub use header::{HeaderTemplate, DEFAULT_HEADER};
