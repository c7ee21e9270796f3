//! Init command - write the global settings file
//!
//! With `--server` every value comes from flags; without it the values are
//! asked for interactively, defaulting to the flags and any existing file.

use std::path::Path;

use anyhow::{bail, Result};
use sidekick::config::{self, ConfigError};
use sidekick::domain::ports::Prompter;
use sidekick::infrastructure::DialoguerPrompter;
use sidekick::{ServerConfig, SidekickError};
use tracing::info;

use super::common::settings_path;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Values passed on the command line
#[derive(Debug, Clone, Default)]
pub struct InitFlags {
    pub server: Option<String>,
    pub user: Option<String>,
    pub docker_username: Option<String>,
    pub domain: Option<String>,
    pub age_key: Option<String>,
    pub force: bool,
}

pub fn cmd_init(flags: InitFlags, config_path: Option<&Path>, ui: &UiContext) -> Result<()> {
    let path = settings_path(config_path)?;

    if path.exists() && !flags.force {
        if ui.json {
            crate::ui::json::emit_or_log(serde_json::json!({
                "event": "error",
                "command": "init",
                "kind": "already_exists",
                "path": path.display().to_string(),
                "message": "sidekick config already exists"
            }));
        }
        bail!(
            "sidekick config already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    // Start from the current file so `--force` keeps what it is not told to change
    let existing = config::load_with_warnings(&path)
        .map(|(settings, _)| settings)
        .unwrap_or_default();

    let settings = if flags.server.is_some() {
        from_flags(existing, flags)
    } else {
        ask(&DialoguerPrompter::new(), existing, flags)?
    };
    settings.validate().map_err(SidekickError::from)?;

    config::save(&path, &settings).map_err(SidekickError::from)?;
    info!(path = %path.display(), "Wrote sidekick config");

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "init",
            "status": "success",
            "path": path.display().to_string(),
        }))?;
    } else {
        println!(
            "{} {}",
            Icon::Success.colored(ui.color, ui.unicode),
            ColoredText::success(format!("Wrote settings to {}", path.display())).render(ui.color)
        );
        println!("Next: run `sidekick launch` in your app directory");
    }
    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn from_flags(mut settings: ServerConfig, flags: InitFlags) -> ServerConfig {
    if let Some(server) = non_empty(flags.server) {
        settings.server_address = server;
    }
    if let Some(user) = non_empty(flags.user) {
        settings.remote_user = user;
    }
    if let Some(username) = non_empty(flags.docker_username) {
        settings.docker_username = Some(username);
    }
    if let Some(domain) = non_empty(flags.domain) {
        settings.public_domain = Some(domain);
    }
    if let Some(key) = non_empty(flags.age_key) {
        settings.age_public_key = Some(key);
    }
    settings
}

fn ask(
    prompter: &dyn Prompter,
    existing: ServerConfig,
    flags: InitFlags,
) -> Result<ServerConfig, SidekickError> {
    let defaults = from_flags(existing, flags);
    let optional = |value: String| Some(value.trim().to_string()).filter(|v| !v.is_empty());

    let server = prompter.input(
        "VPS address (IP or hostname)",
        Some(defaults.server_address.as_str()).filter(|s| !s.is_empty()),
    )?;
    let server = server.trim().to_string();
    if server.is_empty() {
        return Err(ConfigError::MissingField {
            field: "serverAddress",
        }
        .into());
    }

    let user = prompter.input("SSH user", Some(defaults.remote_user.as_str()))?;
    let docker_username = prompter.input(
        "Docker Hub username",
        defaults.docker_username.as_deref(),
    )?;
    let domain = prompter.input(
        "Public domain (leave empty to use the VPS address)",
        defaults.public_domain.as_deref(),
    )?;
    let age_key = prompter.input(
        "age public key for env files (leave empty to skip)",
        defaults.age_public_key.as_deref(),
    )?;

    Ok(ServerConfig {
        server_address: server,
        remote_user: optional(user).unwrap_or(defaults.remote_user),
        docker_username: optional(docker_username),
        public_domain: optional(domain),
        age_public_key: optional(age_key),
        ..defaults
    })
}
