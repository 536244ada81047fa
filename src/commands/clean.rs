//! Clean command handler
//!
//! Removes the output directory.

use anyhow::Result;

use greedy_build::presentation::Commands;
use greedy_build::CleanResult;

use super::{emit_complete, emit_start, LocalPipeline};
use crate::ui::context::UiContext;
use crate::ui::views::clean::render_clean_result;

/// Execute the clean command
pub fn cmd_clean(pipeline: &LocalPipeline, ui: &UiContext) -> Result<()> {
    if ui.json {
        emit_start(Commands::Clean.name())?;
    }

    let result = pipeline.clean()?;
    report_clean(pipeline, &result, ui)?;

    if ui.json {
        emit_complete(Commands::Clean.name())?;
    }
    Ok(())
}

pub(crate) fn report_clean(
    pipeline: &LocalPipeline,
    result: &CleanResult,
    ui: &UiContext,
) -> Result<()> {
    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "cleaned",
            "directory": result.directory.display().to_string(),
            "removed": result.removed,
        }))?;
    } else if !ui.quiet {
        print!(
            "{}",
            render_clean_result(result, &pipeline.options().root, ui.color, ui.unicode)
        );
    }
    Ok(())
}
