//! Command handlers
//!
//! Each handler runs one pipeline stage (or both) and renders the outcome.

pub mod build;
pub mod clean;
pub mod run;

use greedy_build::{LocalFs, PackageManifest, Pipeline};

/// The pipeline every command operates on
pub type LocalPipeline = Pipeline<LocalFs, PackageManifest>;

pub(crate) fn emit_start(command: &str) -> anyhow::Result<()> {
    crate::ui::json::emit(serde_json::json!({
        "event": "start",
        "command": command,
        "version": env!("CARGO_PKG_VERSION"),
    }))?;
    Ok(())
}

pub(crate) fn emit_complete(command: &str) -> anyhow::Result<()> {
    crate::ui::json::emit(serde_json::json!({
        "event": "complete",
        "command": command,
        "success": true,
    }))?;
    Ok(())
}
