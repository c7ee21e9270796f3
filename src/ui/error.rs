//! Error reporting for the command layer

use sidekick::application::DeployError;
use sidekick::config::ConfigError;
use sidekick::domain::ports::{RecordError, RemoteError, SecretError};
use sidekick::error::PreconditionError;
use sidekick::SidekickError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::ci::{github_actions_annotation, running_in_github_actions, AnnotationLevel, Location};
use crate::ui::context::UiContext;

/// Report a command failure on stderr (or as an NDJSON event in JSON mode)
pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    let deploy = err.downcast_ref::<DeployError>();
    let sidekick = deploy
        .map(|d| &d.source)
        .or_else(|| err.downcast_ref::<SidekickError>());
    let message = match deploy {
        Some(d) => d.source.to_string(),
        None => format!("{:#}", err),
    };

    if ui.json {
        let mut event = serde_json::json!({
            "event": "error",
            "message": message,
        });
        if let Some(d) = deploy {
            event["stage"] = serde_json::json!(d.stage);
        }
        crate::ui::json::emit_or_log(event);
        return;
    }

    if ui.caps.is_ci && running_in_github_actions() {
        eprintln!(
            "{}",
            github_actions_annotation(AnnotationLevel::Error, &message, &Location::default())
        );
    }

    let mut block = ErrorBlock::new(message);
    if let Some(d) = deploy {
        block = block.with_stage(d.stage.label());
    }
    if let Some(fix) = sidekick.and_then(fix_hint) {
        block = block.with_fix(fix);
    }
    eprint!("{}", block.render(ui.color, ui.unicode));
}

/// What the user can do about an error, when there is an obvious next step
pub fn fix_hint(err: &SidekickError) -> Option<String> {
    let hint = match err {
        SidekickError::Config(ConfigError::NotInitialized { .. }) => "Run `sidekick init`".to_string(),
        SidekickError::Config(ConfigError::MissingField { field }) => {
            format!("Set `{field}` in the sidekick config or rerun `sidekick init --force`")
        }
        SidekickError::Record(RecordError::NotInitialized { .. }) => {
            "Run `sidekick launch` to deploy this app for the first time".to_string()
        }
        SidekickError::Precondition(PreconditionError::DirtyWorkingTree) => {
            "Commit or stash your changes, then run `sidekick preview` again".to_string()
        }
        SidekickError::Precondition(PreconditionError::MissingDockerfile { .. }) => {
            "Run sidekick from the directory containing your Dockerfile, or pass --project".to_string()
        }
        SidekickError::Remote(RemoteError::AuthenticationFailed { destination, .. }) => {
            format!("Check that your SSH key is authorized for {destination}")
        }
        SidekickError::Secret(SecretError::ToolMissing(tool)) => {
            format!("Install {tool} (https://github.com/getsops/sops)")
        }
        _ => return None,
    };
    Some(hint)
}
