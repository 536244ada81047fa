//! Config warning views

use greedy_build::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };

    let mut out = format!(
        "{} Unknown config key '{}' in {}",
        ColoredText::warning(Icon::Warning.as_str(supports_unicode)).render(supports_color),
        warning.key,
        location
    );
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    out.push('\n');
    out
}
