//! Glob pattern value objects
//!
//! Patterns are validated up front so a typo fails the build before the
//! output directory is touched.

use std::fmt;
use std::path::Path;

use crate::error::{GreedyError, GreedyResult};

/// A single validated source pattern, e.g. `./src/helpers/*.scss`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobPattern {
    raw: String,
    relative: String,
}

impl GlobPattern {
    pub fn new(raw: impl Into<String>) -> GreedyResult<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GreedyError::InvalidPattern {
                pattern: raw,
                message: "pattern is empty".to_string(),
            });
        }

        let relative = strip_current_dir(trimmed).to_string();
        if let Err(e) = glob::Pattern::new(&relative) {
            return Err(GreedyError::InvalidPattern {
                pattern: raw,
                message: e.msg.to_string(),
            });
        }

        Ok(Self { raw, relative })
    }

    /// The pattern as declared
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Pattern anchored at `root`.
    ///
    /// The root is escaped so that only the declared part is interpreted as a
    /// glob. Absolute patterns are returned unchanged.
    pub fn anchored(&self, root: &Path) -> String {
        if Path::new(&self.relative).is_absolute() {
            return self.relative.clone();
        }

        let root = root.to_string_lossy();
        if root.is_empty() || root == "." {
            return self.relative.clone();
        }

        let escaped = glob::Pattern::escape(&root);
        format!("{}/{}", escaped.trim_end_matches('/'), self.relative)
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn strip_current_dir(mut pattern: &str) -> &str {
    while let Some(rest) = pattern.strip_prefix("./") {
        pattern = rest;
    }
    pattern
}

/// Ordered list of source patterns.
///
/// Declaration order is concatenation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlobPatternList {
    patterns: Vec<GlobPattern>,
}

impl GlobPatternList {
    pub fn new<I, S>(patterns: I) -> GreedyResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns = patterns
            .into_iter()
            .map(GlobPattern::new)
            .collect::<GreedyResult<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn iter(&self) -> impl Iterator<Item = &GlobPattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl<'a> IntoIterator for &'a GlobPatternList {
    type Item = &'a GlobPattern;
    type IntoIter = std::slice::Iter<'a, GlobPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}
