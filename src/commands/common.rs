//! Helpers shared by the commands

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use sidekick::application::{DeployOptions, DeployResult, DeployUseCase};
use sidekick::config::{self, ConfigWarning};
use sidekick::domain::ports::DeployEventSink;
use sidekick::infrastructure::JsonEventSink;
use sidekick::{ServerConfig, SidekickError};

use crate::ui::ci::{github_actions_annotation, running_in_github_actions, AnnotationLevel, Location};
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::deploy::{deploy_result_json, print_deploy_summary, ConsoleEventSink};

/// `--config` if given, else `~/.config/sidekick/sidekick.yml`
pub(crate) fn settings_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(config::default_path().map_err(SidekickError::from)?),
    }
}

/// Load the global settings and report unknown keys
pub(crate) fn load_settings(explicit: Option<&Path>, ui: &UiContext) -> Result<ServerConfig> {
    let path = settings_path(explicit)?;
    let (settings, warnings) = config::load(&path).map_err(SidekickError::from)?;
    for warning in &warnings {
        print_config_warning(warning, ui);
    }
    Ok(settings)
}

/// Absolute project directory
pub(crate) fn project_root(project: &Path) -> Result<PathBuf> {
    project
        .canonicalize()
        .with_context(|| format!("project directory {} not found", project.display()))
}

pub(crate) fn config_warning_message(warning: &ConfigWarning) -> String {
    let mut message = format!("Unknown config key '{}'", warning.key);
    if let Some(line) = warning.line {
        message.push_str(&format!(" (line {})", line));
    }
    if let Some(suggestion) = &warning.suggestion {
        message.push_str(&format!(" - did you mean '{}'?", suggestion));
    }
    message
}

fn print_config_warning(warning: &ConfigWarning, ui: &UiContext) {
    let message = config_warning_message(warning);

    if ui.caps.is_ci && running_in_github_actions() {
        let location = Location {
            file: Some(warning.file.display().to_string()),
            line: warning.line,
        };
        eprintln!(
            "{}",
            github_actions_annotation(AnnotationLevel::Warning, &message, &location)
        );
    }

    if ui.json {
        crate::ui::json::emit_or_log(serde_json::json!({
            "event": "warning",
            "message": message,
            "file": warning.file.display().to_string(),
        }));
        return;
    }

    eprintln!(
        "{} {}",
        Icon::Warning.colored(ui.color, ui.unicode),
        ColoredText::warning(message).render(ui.color)
    );
}

/// Run the pipeline with progress output and print the result
pub(crate) fn run_deploy(
    use_case: &DeployUseCase,
    options: &DeployOptions,
    ui: &UiContext,
    command: &'static str,
    icon: Icon,
    title: &'static str,
) -> Result<DeployResult> {
    let sink: Arc<dyn DeployEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout(command))
    } else {
        Arc::new(ConsoleEventSink::new(*ui, icon, title))
    };

    // The console ticker stops when the last handle drops
    let result = use_case.execute_with_events(options, sink)?;

    if ui.json {
        crate::ui::json::emit(deploy_result_json(command, &result))?;
    } else {
        print_deploy_summary(title, &result, ui)?;
    }
    Ok(result)
}
