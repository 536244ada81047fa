use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use greedy_build::config::{ColorMode, Config, Verbosity};
use greedy_build::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub quiet: bool,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, verbose, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color,
            },
        };

        let verbose = match config.output.verbosity {
            Verbosity::Verbose => verbose.max(1),
            _ => verbose,
        };
        let quiet = verbose == 0 && config.output.verbosity == Verbosity::Quiet;

        Self {
            json,
            verbose,
            quiet,
            color: color && !json,
            unicode: caps.supports_unicode && !caps.is_ci,
        }
    }
}
