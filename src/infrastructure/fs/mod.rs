//! File system implementations

mod local;
#[cfg(test)]
mod mock;

pub use local::LocalFs;
#[cfg(test)]
pub use mock::MockFileSystem;
