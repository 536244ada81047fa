//! Default command handler
//!
//! Cleans the output directory, then builds. A failed clean stops before
//! anything is written.

use anyhow::Result;

use super::build::{report_bundle, report_completion};
use super::clean::report_clean;
use super::{emit_complete, emit_start, LocalPipeline};
use crate::ui::context::UiContext;

/// Execute clean followed by build
pub fn cmd_run(pipeline: &LocalPipeline, ui: &UiContext) -> Result<()> {
    if ui.json {
        emit_start("default")?;
    }

    // A failed clean returns here, before the build starts
    let cleaned = pipeline.clean()?;
    report_clean(pipeline, &cleaned, ui)?;

    let bundle = pipeline.build()?;
    report_bundle(pipeline, &bundle, ui)?;
    report_completion(ui)?;

    if ui.json {
        emit_complete("default")?;
    }
    Ok(())
}
