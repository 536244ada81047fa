//! greedy-build CLI - bundles the sass-greedy grid library
//!
//! Usage: greedy-build [COMMAND]
//!
//! Commands:
//!   build   Concatenate the sources into dist/_greedy.scss
//!   clean   Remove the output directory
//!
//! Without a command, cleans and then builds.

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use greedy_build::config::ConfigWarning;
use greedy_build::presentation::{create_pipeline, Cli, Commands};
use greedy_build::Config;

use crate::ui::context::UiContext;
use crate::ui::views::config::render_config_warning;

fn main() {
    let cli = Cli::parse();

    let (config, warnings) = match Config::load_for_root(&cli.root) {
        Ok(loaded) => loaded,
        Err(err) => {
            crate::ui::error::print_error(&anyhow::Error::new(err), cli.json, None);
            std::process::exit(1);
        }
    };
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    // `ui.color` already accounts for NO_COLOR unless color was forced
    crossterm::style::force_color_output(ui.color);

    if let Err(err) = run(&cli, &config, &warnings, &ui) {
        crate::ui::error::print_error(&err, ui.json, Some(&ui));
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config, warnings: &[ConfigWarning], ui: &UiContext) -> Result<()> {
    for warning in warnings {
        if ui.json {
            crate::ui::json::emit(serde_json::json!({
                "event": "warning",
                "kind": "unknown_config_key",
                "key": warning.key,
                "file": warning.file.display().to_string(),
                "line": warning.line,
                "suggestion": warning.suggestion,
            }))?;
        } else {
            eprint!("{}", render_config_warning(warning, ui.color, ui.unicode));
        }
    }

    let pipeline = create_pipeline(&cli.root, config)?;

    match cli.command {
        Some(Commands::Build) => commands::build::cmd_build(&pipeline, ui),
        Some(Commands::Clean) => commands::clean::cmd_clean(&pipeline, ui),
        None => commands::run::cmd_run(&pipeline, ui),
    }
}
