use greedy_build::GreedyError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Error.as_str(supports_unicode);
    let mut out = format!(
        "{} {}\n",
        ColoredText::error(icon).render(supports_color),
        ColoredText::error(err.to_string()).bold().render(supports_color)
    );

    if let Some(path) = err.downcast_ref::<GreedyError>().and_then(GreedyError::path) {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim(format!("at {}", path.display())).render(supports_color)
        ));
    }

    out
}

/// Print a fatal error to stderr, or as a JSON `error` event on stdout.
///
/// Uses the resolved UI settings when they exist; before config has loaded
/// only the terminal itself is consulted.
pub fn print_error(err: &anyhow::Error, json: bool, ui: Option<&UiContext>) {
    if json {
        let mut output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        if let Some(path) = err.downcast_ref::<GreedyError>().and_then(GreedyError::path) {
            output["path"] = serde_json::Value::String(path.display().to_string());
        }
        let _ = crate::ui::json::emit(output);
        return;
    }

    let (color, unicode) = error_style(ui, detect_capabilities);
    eprint!("{}", format_error(err, color, unicode));
}

fn error_style(
    ui: Option<&UiContext>,
    detect: impl FnOnce() -> TerminalCapabilities,
) -> (bool, bool) {
    match ui {
        Some(ui) => (ui.color, ui.unicode),
        None => {
            let caps = detect();
            (caps.supports_color && caps.is_tty, caps.supports_unicode)
        }
    }
}
