use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
}

impl Icon {
    pub fn as_str(self, supports_unicode: bool) -> &'static str {
        match (self, supports_unicode) {
            (Icon::Success, true) => theme::icons::SUCCESS,
            (Icon::Error, true) => theme::icons::ERROR,
            (Icon::Warning, true) => theme::icons::WARNING,
            (Icon::Arrow, true) => theme::icons::ARROW,
            (Icon::Success, false) => theme::icons_ascii::SUCCESS,
            (Icon::Error, false) => theme::icons_ascii::ERROR,
            (Icon::Warning, false) => theme::icons_ascii::WARNING,
            (Icon::Arrow, false) => theme::icons_ascii::ARROW,
        }
    }
}
