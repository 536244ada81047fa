//! Build metadata value object

/// Version and author substituted verbatim into the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMetadata {
    pub version: String,
    pub author: String,
}

impl BuildMetadata {
    pub fn new(version: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            author: author.into(),
        }
    }
}
