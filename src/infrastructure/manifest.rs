//! Package manifest metadata source
//!
//! Reads `version` and `author` from an npm-style `package.json`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::ports::MetadataSource;
use crate::domain::value_objects::BuildMetadata;
use crate::error::{GreedyError, GreedyResult};

/// Default manifest file name, relative to the project root
pub const DEFAULT_MANIFEST: &str = "package.json";

#[derive(Debug, Deserialize)]
struct RawManifest {
    version: Option<String>,
    author: Option<Author>,
}

/// npm accepts either `"Name <email> (url)"` or a person object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Author {
    Name(String),
    Person {
        name: String,
        email: Option<String>,
        url: Option<String>,
    },
}

impl Author {
    fn render(self) -> String {
        match self {
            Author::Name(name) => name,
            Author::Person { name, email, url } => {
                let mut out = name;
                if let Some(email) = email {
                    out.push_str(&format!(" <{}>", email));
                }
                if let Some(url) = url {
                    out.push_str(&format!(" ({})", url));
                }
                out
            }
        }
    }
}

/// `package.json` on disk
#[derive(Debug, Clone)]
pub struct PackageManifest {
    path: PathBuf,
}

impl PackageManifest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse manifest content; `path` is only used for error messages
    pub fn parse(path: &Path, content: &str) -> GreedyResult<BuildMetadata> {
        let raw: RawManifest =
            serde_json::from_str(content).map_err(|e| GreedyError::InvalidManifest {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let missing = |field: &str| GreedyError::MissingManifestField {
            path: path.to_path_buf(),
            field: field.to_string(),
        };

        let version = raw.version.ok_or_else(|| missing("version"))?;
        let author = raw.author.ok_or_else(|| missing("author"))?.render();

        Ok(BuildMetadata { version, author })
    }
}

impl MetadataSource for PackageManifest {
    fn load(&self) -> GreedyResult<BuildMetadata> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| GreedyError::ManifestUnreadable {
                path: self.path.clone(),
                source: e,
            })?;
        Self::parse(&self.path, &content)
    }
}
