//! Clean command UI views

use std::path::Path;

use greedy_build::CleanResult;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::display_path;

/// Render the outcome of a clean
pub fn render_clean_result(
    result: &CleanResult,
    root: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = ColoredText::success(Icon::Success.as_str(supports_unicode)).render(supports_color);
    let dir = display_path(&result.directory, root);

    if result.removed {
        format!("{} Cleaned {}\n", icon, ColoredText::info(dir).render(supports_color))
    } else {
        format!(
            "{} {}\n",
            icon,
            ColoredText::dim(format!("{} already clean", dir)).render(supports_color)
        )
    }
}
