//! Header template rendering
//!
//! The banner only ever needs two fields, so rendering is a single literal
//! pass over the template instead of a general template engine.

use crate::domain::value_objects::BuildMetadata;

/// Banner prepended to every bundle
pub const DEFAULT_HEADER: &str = "/*!
* sass-greedy v{version}
* A flexible, lightweight and simple grid generator for sass.
*
* Author: {author}
*/
";

const VERSION: &str = "{version}";
const AUTHOR: &str = "{author}";

/// Template with `{version}` and `{author}` placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTemplate(String);

impl HeaderTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitute the placeholders.
    ///
    /// Values are inserted verbatim and never re-scanned; any other `{...}`
    /// is copied through unchanged.
    pub fn render(&self, metadata: &BuildMetadata) -> String {
        let mut out = String::with_capacity(
            self.0.len() + metadata.version.len() + metadata.author.len(),
        );
        let mut rest = self.0.as_str();

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            if let Some(after) = tail.strip_prefix(VERSION) {
                out.push_str(&metadata.version);
                rest = after;
            } else if let Some(after) = tail.strip_prefix(AUTHOR) {
                out.push_str(&metadata.author);
                rest = after;
            } else {
                out.push('{');
                rest = &tail[1..];
            }
        }

        out.push_str(rest);
        out
    }
}

impl Default for HeaderTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER)
    }
}
