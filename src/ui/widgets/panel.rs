use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::border::BorderSet;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStyle {
    #[default]
    Info,
    Success,
    Error,
}

/// Bordered block of lines
#[derive(Debug, Default, Clone)]
pub struct Panel {
    lines: Vec<String>,
    style: PanelStyle,
}

impl Panel {
    pub fn new(style: PanelStyle) -> Self {
        Self {
            lines: Vec::new(),
            style,
        }
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        self.lines.extend(line.lines().map(str::to_string));
    }

    pub fn add_empty(&mut self) {
        self.lines.push(String::new());
    }

    /// `label: value`, with labels padded to a common width
    pub fn add_fields(&mut self, fields: &[(&str, String)]) {
        let width = fields.iter().map(|(label, _)| label.width()).max().unwrap_or(0);
        for (label, value) in fields {
            let pad = " ".repeat(width - label.width());
            self.lines.push(format!("{label}:{pad} {value}"));
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let inner_width = self
            .lines
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0)
            + 2;

        let borders = BorderSet::for_terminal(supports_unicode);
        let v = self.paint(borders.vertical, supports_color);

        let mut out = String::new();
        let top = borders.rule(borders.top_left, borders.top_right, inner_width);
        out.push_str(&self.paint(&top, supports_color));
        out.push('\n');

        for line in &self.lines {
            let pad = inner_width - 1 - visible_width(line);
            out.push_str(&format!("{v} {line}{}{v}\n", " ".repeat(pad)));
        }

        let bottom = borders.rule(borders.bottom_left, borders.bottom_right, inner_width);
        out.push_str(&self.paint(&bottom, supports_color));
        out.push('\n');
        out
    }

    fn paint(&self, s: &str, supports_color: bool) -> String {
        if !supports_color {
            return s.to_string();
        }
        let color = match self.style {
            PanelStyle::Info => theme::colors::INFO,
            PanelStyle::Success => theme::colors::SUCCESS,
            PanelStyle::Error => theme::colors::ERROR,
        };
        format!("{}", s.with(color))
    }
}

fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> std::borrow::Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return std::borrow::Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // ESC [ ... <final letter>
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    std::borrow::Cow::Owned(out)
}
