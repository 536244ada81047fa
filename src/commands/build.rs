//! Build command handler
//!
//! Bundles the sources into the output file without cleaning first.

use anyhow::Result;

use greedy_build::presentation::Commands;
use greedy_build::BundleResult;

use super::{emit_complete, emit_start, LocalPipeline};
use crate::ui::context::UiContext;
use crate::ui::views::build::{render_bundle_result, render_completion, COMPLETION_MESSAGE};

/// Execute the build command
pub fn cmd_build(pipeline: &LocalPipeline, ui: &UiContext) -> Result<()> {
    if ui.json {
        emit_start(Commands::Build.name())?;
    }

    let result = pipeline.build()?;
    report_bundle(pipeline, &result, ui)?;
    report_completion(ui)?;

    if ui.json {
        emit_complete(Commands::Build.name())?;
    }
    Ok(())
}

pub(crate) fn report_bundle(
    pipeline: &LocalPipeline,
    result: &BundleResult,
    ui: &UiContext,
) -> Result<()> {
    if ui.json {
        for pattern in &result.empty_patterns {
            crate::ui::json::emit(serde_json::json!({
                "event": "warning",
                "kind": "no_match",
                "pattern": pattern,
            }))?;
        }
        crate::ui::json::emit(serde_json::json!({
            "event": "bundle_written",
            "path": result.output.display().to_string(),
            "version": result.metadata.version,
            "author": result.metadata.author,
            "sources": result
                .sources
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>(),
            "bytes": result.bytes_written,
            "hash": result.hash.as_str(),
        }))?;
    } else if !ui.quiet {
        print!(
            "{}",
            render_bundle_result(
                result,
                &pipeline.options().root,
                ui.verbose,
                ui.color,
                ui.unicode
            )
        );
    }
    Ok(())
}

pub(crate) fn report_completion(ui: &UiContext) -> Result<()> {
    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "message",
            "message": COMPLETION_MESSAGE,
        }))?;
    } else if !ui.quiet {
        print!("{}", render_completion(ui.color));
    }
    Ok(())
}
