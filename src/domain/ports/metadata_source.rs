//! MetadataSource port - where the header's version and author come from

use crate::domain::value_objects::BuildMetadata;
use crate::error::GreedyResult;

/// Supplies build metadata (read once per build, never mutated)
pub trait MetadataSource {
    fn load(&self) -> GreedyResult<BuildMetadata>;
}

/// Fixed metadata, handy when the values are already known
impl MetadataSource for BuildMetadata {
    fn load(&self) -> GreedyResult<BuildMetadata> {
        Ok(self.clone())
    }
}
