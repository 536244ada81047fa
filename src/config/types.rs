//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::DEFAULT_HEADER;
use crate::error::GreedyResult;
use crate::infrastructure::manifest::DEFAULT_MANIFEST;

use super::loader::{self, ConfigWarning};

/// Source patterns of the sass-greedy library, in concatenation order
pub const DEFAULT_PATTERNS: [&str; 3] = [
    "./src/helpers/*.scss",
    "./src/generators/*.scss",
    "./src/*.scss",
];

/// Build configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_patterns")]
    pub patterns: Vec<String>,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_file_name")]
    pub file_name: String,

    #[serde(default)]
    pub separator: String,

    #[serde(default = "default_header")]
    pub header: String,

    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            patterns: default_patterns(),
            output_dir: default_output_dir(),
            file_name: default_file_name(),
            separator: String::new(),
            header: default_header(),
            manifest: default_manifest(),
        }
    }
}

fn default_patterns() -> Vec<String> {
    DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_file_name() -> String {
    "_greedy.scss".to_string()
}

fn default_header() -> String {
    DEFAULT_HEADER.to_string()
}

fn default_manifest() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST)
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load `greedy.toml` from the project root (defaults if absent), then
    /// apply environment overrides.
    pub fn load_for_root(root: &Path) -> GreedyResult<(Self, Vec<ConfigWarning>)> {
        loader::load_for_root(root)
    }
}
