//! Deploy command - redeploy from the project's deployment record

use std::path::Path;

use anyhow::Result;
use sidekick::application::DeployOptions;
use sidekick::domain::ports::RecordRepository;
use sidekick::presentation::{create_deploy_use_case, create_record_repository};
use sidekick::SidekickError;

use super::common::{load_settings, project_root, run_deploy};
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn cmd_deploy(project: &Path, config_path: Option<&Path>, ui: &UiContext) -> Result<()> {
    let settings = load_settings(config_path, ui)?;
    let root = project_root(project)?;

    let record = create_record_repository(&root)
        .load()
        .map_err(SidekickError::from)?;
    let options = DeployOptions::redeploy(&root, record);
    let use_case = create_deploy_use_case(&settings, &root)?;

    run_deploy(&use_case, &options, ui, "deploy", Icon::Deploy, "Sidekick Deploy")?;
    Ok(())
}
