//! Configuration module for greedy-build
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (GREEDY_*)
//! 3. Project config (greedy.toml in the project root)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, CONFIG_FILE_NAME};
pub use types::{BuildConfig, ColorMode, Config, OutputConfig, Verbosity, DEFAULT_PATTERNS};
