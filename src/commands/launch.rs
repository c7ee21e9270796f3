//! Launch command - first deployment of the app in the project directory

use std::path::Path;

use anyhow::Result;
use sidekick::application::{gather_launch_answers, launch_defaults, DeployOptions};
use sidekick::domain::ports::RecordRepository;
use sidekick::error::PreconditionError;
use sidekick::infrastructure::DialoguerPrompter;
use sidekick::presentation::{create_deploy_use_case, create_record_repository};
use sidekick::SidekickError;
use tracing::info;

use super::common::{load_settings, project_root, run_deploy};
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn cmd_launch(project: &Path, config_path: Option<&Path>, ui: &UiContext) -> Result<()> {
    let settings = load_settings(config_path, ui)?;
    let root = project_root(project)?;

    let records = create_record_repository(&root);
    if records.exists() {
        return Err(SidekickError::from(PreconditionError::AlreadyLaunched {
            path: records.path().to_path_buf(),
        })
        .into());
    }
    // Fail before asking anything the run could not use
    settings
        .require_docker_username()
        .map_err(SidekickError::from)?;

    let defaults = launch_defaults(&root, &settings);
    let answers = gather_launch_answers(&DialoguerPrompter::new(), &defaults, &root)?;
    info!(app = %answers.app, host = %answers.app_host, "Launching");

    let options = DeployOptions::launch(&root, answers.app, answers.port, answers.app_host)
        .with_env_file(answers.env_file);
    let use_case = create_deploy_use_case(&settings, &root)?;

    run_deploy(&use_case, &options, ui, "launch", Icon::Launch, "Sidekick Launch")?;
    Ok(())
}
