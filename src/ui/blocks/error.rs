use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Boxed error with an optional failing stage and fix hint
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    stage: Option<String>,
    message: String,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            stage: None,
            message: message.into(),
            fix: None,
        }
    }

    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut panel = Panel::new(PanelStyle::Error);
        panel.add_line(format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("ERROR").bold().render(supports_color)
        ));
        if let Some(stage) = &self.stage {
            panel.add_line(format!("Stage: {stage}"));
        }
        panel.add_empty();
        panel.add_line(self.message.trim_end());

        if let Some(fix) = &self.fix {
            panel.add_empty();
            panel.add_line(format!(
                "{} {} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim("Fix:").render(supports_color),
                fix
            ));
        }

        panel.render(supports_color, supports_unicode)
    }
}
