use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use sidekick::presentation::cli::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    pub animation: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, cli_no_animation: bool) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, cli_color, cli_no_animation, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        cli_no_animation: bool,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        // Verbose runs interleave log lines with progress, which breaks
        // in-place redraws.
        let animation = !(json || cli_no_animation || caps.is_ci || verbose > 0) && caps.is_tty;

        Self {
            json,
            verbose,
            caps,
            color,
            unicode: caps.supports_unicode,
            animation,
        }
    }
}
