//! CLI Argument Parsing
//!
//! Global flags (--root, --json, --color, --verbose) are inherited by all
//! subcommands. Running without a subcommand cleans, then builds.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// greedy-build - bundle the sass-greedy grid library into one partial
#[derive(Parser, Debug)]
#[command(name = "greedy-build")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'greedy-build' without a command to clean and then build.")]
pub struct Cli {
    /// Project root containing package.json and the sources
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v lists bundled files)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Concatenate the sources into the output file
    Build,

    /// Remove the output directory
    Clean,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Build => "build",
            Commands::Clean => "clean",
        }
    }
}
