//! Launch questions
//!
//! Gathers what a first deployment needs (app name, port, hostname, env
//! file) through the `Prompter` port, with defaults read from the project.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ServerConfig;
use crate::domain::ports::Prompter;
use crate::domain::services::default_hostname;
use crate::domain::value_objects::{AppName, ContainerPort};
use crate::error::{PreconditionError, SidekickResult};

/// Suggested answers shown in the prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchDefaults {
    pub app_name: Option<String>,
    pub port: Option<String>,
    pub base_domain: String,
    pub env_file: Option<PathBuf>,
}

/// Validated answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchAnswers {
    pub app: AppName,
    pub port: ContainerPort,
    pub app_host: String,
    pub env_file: Option<PathBuf>,
}

/// First port of the first `EXPOSE` instruction, without a protocol suffix
pub fn detect_exposed_port(dockerfile: &str) -> Option<String> {
    dockerfile.lines().find_map(|line| {
        let mut words = line.split_whitespace();
        let instruction = words.next()?;
        if !instruction.eq_ignore_ascii_case("EXPOSE") {
            return None;
        }
        let port = words.next()?;
        Some(port.split('/').next().unwrap_or(port).to_string())
    })
}

/// Defaults derived from the project directory and global settings
pub fn launch_defaults(project_root: &Path, config: &ServerConfig) -> LaunchDefaults {
    let app_name = project_root
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_lowercase()))
        .filter(|name| AppName::parse(name).is_ok());

    let port = fs::read_to_string(project_root.join("Dockerfile"))
        .ok()
        .and_then(|content| detect_exposed_port(&content));
    debug!(?app_name, ?port, "Derived launch defaults");

    let env_file = project_root
        .join(".env")
        .is_file()
        .then(|| PathBuf::from(".env"));

    LaunchDefaults {
        app_name,
        port,
        base_domain: config.base_domain().to_string(),
        env_file,
    }
}

/// Ask the launch questions
///
/// An empty app name or port is rejected before anything else happens.
pub fn gather_launch_answers(
    prompter: &dyn Prompter,
    defaults: &LaunchDefaults,
    project_root: &Path,
) -> SidekickResult<LaunchAnswers> {
    let name = prompter.input("App name (url friendly)", defaults.app_name.as_deref())?;
    let app = AppName::parse(name.trim())?;

    let port = prompter.input(
        "Port your app accepts requests on",
        defaults.port.as_deref(),
    )?;
    let port = ContainerPort::parse(port.trim())?;

    let suggested_host = default_hostname(&app, &defaults.base_domain);
    let host = prompter.input("Public hostname", Some(suggested_host.as_str()))?;
    let host = match host.trim() {
        "" => suggested_host,
        host => host.to_string(),
    };

    let default_env = defaults
        .env_file
        .as_ref()
        .map(|p| p.display().to_string());
    let env = prompter.input(
        "Env file with secrets (leave empty for none)",
        default_env.as_deref(),
    )?;
    let env_file = match env.trim() {
        "" => None,
        file => {
            let file = PathBuf::from(file);
            let resolved = project_root.join(&file);
            if !resolved.is_file() {
                return Err(PreconditionError::MissingEnvFile { path: resolved }.into());
            }
            Some(file)
        }
    };

    Ok(LaunchAnswers {
        app,
        port,
        app_host: host,
        env_file,
    })
}
