//! Deploy Options
//!
//! What to deploy and where it was deployed before.

use std::path::{Path, PathBuf};

use crate::domain::entities::DeploymentRecord;
use crate::domain::value_objects::{AppName, ContainerPort, DeploymentKind, RevisionHash};

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Directory holding the Dockerfile and `sidekick.yml`
    pub project_root: PathBuf,
    pub app: AppName,
    pub port: ContainerPort,
    pub kind: DeploymentKind,
    /// Public hostname of the primary app (previews nest under it)
    pub app_host: String,
    /// Env file holding secrets, relative to `project_root` unless absolute
    pub env_file: Option<PathBuf>,
    /// Record from an earlier launch; `None` for the first deployment
    pub previous: Option<DeploymentRecord>,
    /// Where transient files are staged before upload
    pub staging_parent: PathBuf,
}

impl DeployOptions {
    /// First deployment of an app
    pub fn launch(
        project_root: impl Into<PathBuf>,
        app: AppName,
        port: ContainerPort,
        app_host: impl Into<String>,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            app,
            port,
            kind: DeploymentKind::Primary,
            app_host: app_host.into(),
            env_file: None,
            previous: None,
            staging_parent: std::env::temp_dir(),
        }
    }

    /// Redeploy the primary app described by `record`
    pub fn redeploy(project_root: impl Into<PathBuf>, record: DeploymentRecord) -> Self {
        Self {
            project_root: project_root.into(),
            app: record.name.clone(),
            port: record.port.clone(),
            kind: DeploymentKind::Primary,
            app_host: record.url.clone(),
            env_file: record.env.file.clone(),
            previous: Some(record),
            staging_parent: std::env::temp_dir(),
        }
    }

    /// Preview of `revision` next to the app described by `record`
    pub fn preview(
        project_root: impl Into<PathBuf>,
        record: DeploymentRecord,
        revision: RevisionHash,
    ) -> Self {
        Self {
            kind: DeploymentKind::Preview(revision),
            ..Self::redeploy(project_root, record)
        }
    }

    pub fn with_env_file(mut self, env_file: Option<PathBuf>) -> Self {
        self.env_file = env_file;
        self
    }

    pub fn with_staging_parent(mut self, dir: impl Into<PathBuf>) -> Self {
        self.staging_parent = dir.into();
        self
    }

    pub fn dockerfile(&self) -> PathBuf {
        self.project_root.join("Dockerfile")
    }

    /// Env file path resolved against the project root
    pub fn resolved_env_file(&self) -> Option<PathBuf> {
        self.env_file
            .as_deref()
            .map(|file| resolve(&self.project_root, file))
    }

    /// Remote directory relative to the remote user's home
    pub fn remote_dir(&self) -> String {
        self.kind.remote_dir(&self.app)
    }
}

fn resolve(root: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        root.join(file)
    }
}
