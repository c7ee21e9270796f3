//! Preview commands - deploy HEAD as a preview, or list recorded previews

use std::path::Path;

use anyhow::Result;
use sidekick::application::plan_preview;
use sidekick::domain::ports::RecordRepository;
use sidekick::infrastructure::GitCli;
use sidekick::presentation::{create_deploy_use_case, create_record_repository};
use sidekick::SidekickError;

use super::common::{load_settings, project_root, run_deploy};
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::preview::{preview_list_json, render_preview_list};

pub fn cmd_preview(project: &Path, config_path: Option<&Path>, ui: &UiContext) -> Result<()> {
    let settings = load_settings(config_path, ui)?;
    let root = project_root(project)?;

    let records = create_record_repository(&root);
    let options = plan_preview(&GitCli::new(), &records, &root)?;
    let use_case = create_deploy_use_case(&settings, &root)?;

    run_deploy(&use_case, &options, ui, "preview", Icon::Preview, "Sidekick Preview")?;
    Ok(())
}

/// List previews from the record; needs no settings and no network
pub fn cmd_preview_list(project: &Path, ui: &UiContext) -> Result<()> {
    let root = project_root(project)?;
    let record = create_record_repository(&root)
        .load()
        .map_err(SidekickError::from)?;

    if ui.json {
        crate::ui::json::emit(preview_list_json(&record))?;
    } else {
        print!("{}", render_preview_list(&record, ui.color, ui.unicode));
    }
    Ok(())
}
