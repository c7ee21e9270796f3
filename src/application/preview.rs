//! Preview planning
//!
//! A preview deploys exactly what is committed at HEAD, so the working tree
//! must be clean. The check runs before anything touches the host or the
//! filesystem.

use std::path::Path;

use tracing::info;

use crate::domain::ports::{RecordRepository, VersionControl};
use crate::error::{PreconditionError, SidekickResult};

use super::deploy::DeployOptions;

/// Build deploy options for a preview of the current HEAD
pub fn plan_preview(
    vcs: &dyn VersionControl,
    records: &dyn RecordRepository,
    project_root: &Path,
) -> SidekickResult<DeployOptions> {
    if !vcs.is_clean(project_root)? {
        return Err(PreconditionError::DirtyWorkingTree.into());
    }
    let revision = vcs.short_revision(project_root)?;
    let record = records.load()?;
    info!(app = %record.name, %revision, "Planned preview");

    Ok(DeployOptions::preview(project_root, record, revision))
}
