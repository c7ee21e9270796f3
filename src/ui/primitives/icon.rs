use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Pending,
    Arrow,
    Launch,
    Deploy,
    Preview,
    Remote,
}

impl Icon {
    /// (unicode, ascii) glyphs
    fn glyphs(&self) -> (&'static str, &'static str) {
        use crate::ui::theme::{icons as u, icons_ascii as a};
        match self {
            Icon::Success => (u::SUCCESS, a::SUCCESS),
            Icon::Error => (u::ERROR, a::ERROR),
            Icon::Warning => (u::WARNING, a::WARNING),
            Icon::Progress => (u::PROGRESS, a::PROGRESS),
            Icon::Pending => (u::PENDING, a::PENDING),
            Icon::Arrow => (u::ARROW, a::ARROW),
            Icon::Launch => (u::LAUNCH, a::LAUNCH),
            Icon::Deploy => (u::DEPLOY, a::DEPLOY),
            Icon::Preview => (u::PREVIEW, a::PREVIEW),
            Icon::Remote => (u::REMOTE, a::REMOTE),
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let (unicode, ascii) = self.glyphs();
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let glyph = self.render(supports_unicode);
        if !supports_color {
            return glyph.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Progress => theme::colors::WARNING,
            Icon::Pending | Icon::Arrow => theme::colors::DIM,
            Icon::Launch | Icon::Deploy | Icon::Preview | Icon::Remote => theme::colors::INFO,
        };
        format!("{}", glyph.with(color))
    }
}
