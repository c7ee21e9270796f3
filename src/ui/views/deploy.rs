//! Deploy progress and result rendering

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use sidekick::application::DeployResult;
use sidekick::domain::ports::{DeployEvent, DeployEventSink};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::live_region::LiveRegion;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};
use crate::ui::widgets::spinner::{Spinner, TICK};

#[derive(Default)]
struct Progress {
    spinner: Option<Spinner>,
    region: LiveRegion,
}

/// Human-readable deploy progress on stderr
///
/// One line per stage. With animation on, the running stage spins on a
/// background ticker that only redraws; the pipeline never waits for it.
pub struct ConsoleEventSink {
    ui: UiContext,
    icon: Icon,
    title: &'static str,
    progress: Arc<Mutex<Progress>>,
    running: Arc<AtomicBool>,
    ticker: Option<JoinHandle<()>>,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext, icon: Icon, title: &'static str) -> Self {
        let progress = Arc::new(Mutex::new(Progress::default()));
        let running = Arc::new(AtomicBool::new(true));

        let ticker = ui.animation.then(|| {
            let progress = Arc::clone(&progress);
            let running = Arc::clone(&running);
            let unicode = ui.unicode;
            thread::spawn(move || {
                while running.load(Ordering::Relaxed) {
                    thread::sleep(TICK);
                    if let Ok(mut p) = progress.lock() {
                        let Progress { spinner, region } = &mut *p;
                        if let Some(spinner) = spinner.as_mut() {
                            spinner.tick();
                            let _ = region.update(&mut io::stderr(), &spinner.render(unicode));
                        }
                    }
                }
            })
        });

        Self {
            ui,
            icon,
            title,
            progress,
            running,
            ticker,
        }
    }

    fn with_progress(&self, f: impl FnOnce(&mut Progress, &mut io::Stderr) -> io::Result<()>) {
        if let Ok(mut p) = self.progress.lock() {
            let mut err = io::stderr();
            let _ = f(&mut *p, &mut err);
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let (color, unicode, animation) = (self.ui.color, self.ui.unicode, self.ui.animation);
        match event {
            DeployEvent::Started { app, kind, host } => {
                let mut header = CommandHeader::new(self.icon, self.title);
                header.add("App", app);
                header.add("Kind", kind);
                header.add("Host", host);
                eprintln!("{}", header.render(color, unicode));
            }
            DeployEvent::StageStarted { stage } => self.with_progress(|p, err| {
                let spinner = Spinner::new(stage.label());
                if animation {
                    p.region.update(err, &spinner.render(unicode))?;
                }
                p.spinner = Some(spinner);
                Ok(())
            }),
            DeployEvent::StageCompleted { .. } => self.with_progress(|p, err| {
                let Some(spinner) = p.spinner.take() else {
                    return Ok(());
                };
                p.region.commit(err, &spinner.succeed(color, unicode))
            }),
            DeployEvent::StageFailed { stage, .. } => self.with_progress(|p, err| {
                let spinner = p.spinner.take().unwrap_or_else(|| Spinner::new(stage.label()));
                p.region.commit(err, &spinner.fail(color, unicode))
            }),
            DeployEvent::Warning { message } => self.with_progress(|p, err| {
                let line = format!(
                    "{} {}",
                    Icon::Warning.colored(color, unicode),
                    ColoredText::warning(message).render(color)
                );
                p.region.commit(err, &line)?;
                if let Some(spinner) = &p.spinner {
                    if animation {
                        p.region.update(err, &spinner.render(unicode))?;
                    }
                }
                Ok(())
            }),
            DeployEvent::Completed { .. } => {}
        }
    }
}

impl Drop for ConsoleEventSink {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(ticker) = self.ticker.take() {
            let _ = ticker.join();
        }
    }
}

/// Final summary box
pub fn render_deploy_summary(
    title: &str,
    result: &DeployResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut panel = Panel::new(PanelStyle::Success);
    panel.add_line(format!(
        "{} {}",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success(title).bold().render(supports_color)
    ));
    panel.add_empty();
    panel.add_fields(&[
        ("URL", result.url.clone()),
        ("Image", result.image.clone()),
    ]);
    if result.env_changed == Some(true) {
        panel.add_empty();
        panel.add_line(format!(
            "{} env file changed since the last deploy",
            Icon::Warning.colored(supports_color, supports_unicode)
        ));
    }
    panel.render(supports_color, supports_unicode)
}

/// Result line for `--json` runs, after the pipeline's own events
pub fn deploy_result_json(command: &str, result: &DeployResult) -> serde_json::Value {
    serde_json::json!({
        "event": "result",
        "command": command,
        "url": result.url,
        "image": result.image,
        "env_changed": result.env_changed,
    })
}

/// Writes the summary to stdout
pub fn print_deploy_summary(title: &str, result: &DeployResult, ui: &UiContext) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "{}", render_deploy_summary(title, result, ui.color, ui.unicode))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidekick::domain::entities::EnvSettings;
    use sidekick::domain::value_objects::Timestamp;
    use sidekick::{AppName, ContainerPort, DeploymentRecord};

    fn result(env_changed: Option<bool>) -> DeployResult {
        DeployResult {
            url: "https://shop.example.com".to_string(),
            image: "alice/shop".to_string(),
            record: DeploymentRecord::launched(
                AppName::parse("shop").unwrap(),
                "alice/shop",
                ContainerPort::parse("3000").unwrap(),
                "shop.example.com",
                EnvSettings::default(),
                Timestamp::now(),
            ),
            env_changed,
        }
    }

    #[test]
    fn summary_shows_url_and_image() {
        let rendered = render_deploy_summary("Deployed", &result(None), false, false);

        assert!(rendered.contains("[OK] Deployed"));
        assert!(rendered.contains("URL:   https://shop.example.com"));
        assert!(rendered.contains("Image: alice/shop"));
        assert!(!rendered.contains("env file changed"));
    }

    #[test]
    fn summary_mentions_changed_env() {
        let rendered = render_deploy_summary("Deployed", &result(Some(true)), false, false);
        assert!(rendered.contains("[WARN] env file changed since the last deploy"));
    }

    #[test]
    fn json_result_carries_url() {
        let json = deploy_result_json("deploy", &result(Some(false)));
        assert_eq!(json["event"], "result");
        assert_eq!(json["url"], "https://shop.example.com");
        assert_eq!(json["env_changed"], false);
    }
}
