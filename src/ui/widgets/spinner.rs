use std::time::{Duration, Instant};

use crate::ui::primitives::icon::Icon;

const SPINNER_FRAMES_BRAILLE: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const SPINNER_FRAMES_ASCII: &[char] = &['-', '\\', '|', '/'];

/// Frame interval for animated spinners
pub const TICK: Duration = Duration::from_millis(80);

/// Progress line for one running stage
#[derive(Debug, Clone)]
pub struct Spinner {
    current: usize,
    message: String,
    started: Instant,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            current: 0,
            message: message.into(),
            started: Instant::now(),
        }
    }

    pub fn tick(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let frames = if supports_unicode {
            SPINNER_FRAMES_BRAILLE
        } else {
            SPINNER_FRAMES_ASCII
        };
        let frame = frames[self.current % frames.len()];
        format!("{} {}", frame, self.message)
    }

    pub fn succeed(&self, supports_color: bool, supports_unicode: bool) -> String {
        format!(
            "{} {} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            self.message,
            elapsed(self.started.elapsed())
        )
    }

    pub fn fail(&self, supports_color: bool, supports_unicode: bool) -> String {
        format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            self.message
        )
    }
}

fn elapsed(d: Duration) -> String {
    if d.as_secs() >= 1 {
        format!("({}s)", d.as_secs())
    } else {
        format!("({}ms)", d.as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_uses_braille_frames_when_unicode_supported() {
        let s = Spinner::new("Logging into VPS");
        assert!(s.render(true).starts_with('⠋'));
    }

    #[test]
    fn render_uses_ascii_frames_when_unicode_unsupported() {
        let s = Spinner::new("Logging into VPS");
        assert!(s.render(false).starts_with('-'));
    }

    #[test]
    fn tick_advances_frame() {
        let mut s = Spinner::new("Logging into VPS");
        let first = s.render(true);
        s.tick();
        assert_ne!(first, s.render(true));
    }

    #[test]
    fn succeed_and_fail_use_status_icons() {
        let s = Spinner::new("Starting containers");
        assert!(s.succeed(false, false).starts_with("[OK] Starting containers ("));
        assert_eq!(s.fail(false, false), "[FAIL] Starting containers");
    }

    #[test]
    fn elapsed_switches_units() {
        assert_eq!(elapsed(Duration::from_millis(250)), "(250ms)");
        assert_eq!(elapsed(Duration::from_secs(12)), "(12s)");
    }
}
