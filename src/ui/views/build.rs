//! Build command UI views

use std::path::Path;

use greedy_build::BundleResult;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::display_path;

/// Message printed once the bundle is on disk
pub const COMPLETION_MESSAGE: &str = "Build process has been completed successfully.";

/// Render the bundle summary.
///
/// `-v` adds the source list and empty-pattern warnings, `-vv` the hash.
pub fn render_bundle_result(
    result: &BundleResult,
    root: &Path,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    if verbose >= 1 {
        let arrow = Icon::Arrow.as_str(supports_unicode);
        for source in &result.sources {
            out.push_str(&format!(
                "  {} {}\n",
                ColoredText::dim(arrow).render(supports_color),
                display_path(source, root)
            ));
        }

        let warning = Icon::Warning.as_str(supports_unicode);
        for pattern in &result.empty_patterns {
            out.push_str(&format!(
                "{} No files matched {}\n",
                ColoredText::warning(warning).render(supports_color),
                pattern
            ));
        }
    }

    let files = match result.sources.len() {
        1 => "1 file".to_string(),
        n => format!("{} files", n),
    };
    out.push_str(&format!(
        "{} Wrote {} {}\n",
        ColoredText::success(Icon::Success.as_str(supports_unicode)).render(supports_color),
        ColoredText::info(display_path(&result.output, root)).render(supports_color),
        ColoredText::dim(format!(
            "(v{}, {}, {} bytes)",
            result.metadata.version, files, result.bytes_written
        ))
        .render(supports_color)
    ));

    if verbose >= 2 {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim(result.hash.as_str()).render(supports_color)
        ));
    }

    out
}

/// Render the final success line
pub fn render_completion(supports_color: bool) -> String {
    format!(
        "{}\n",
        ColoredText::success(COMPLETION_MESSAGE).render(supports_color)
    )
}
