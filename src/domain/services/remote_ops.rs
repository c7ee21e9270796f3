//! Named remote operations
//!
//! Every command the pipeline sends to the host goes through one of these,
//! so each failure is reported as a specific operation instead of a raw
//! exit status.

use std::path::Path;

use tracing::debug;

use crate::domain::ports::{FileTransfer, RemoteError, RemoteSession};
use crate::domain::value_objects::DeploymentTarget;

/// Compose project every app is started under
pub const COMPOSE_PROJECT: &str = "sidekick";

/// Descriptor file name, locally and on the host
pub const COMPOSE_FILE: &str = "docker-compose.yaml";

/// Encrypted env file name, locally and on the host
pub const ENCRYPTED_ENV_FILE: &str = "encrypted.env";

/// Quote a string for a POSIX shell
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Command that starts the compose project inside `remote_dir`
///
/// With secrets the compose invocation runs under `sops exec-env`, so the
/// decrypted values only ever exist in the compose process environment.
pub fn activate_command(remote_dir: &str, with_secrets: bool) -> String {
    let up = format!("docker compose -p {} up -d", COMPOSE_PROJECT);
    if with_secrets {
        format!(
            "cd {} && sops exec-env {} {}",
            shell_quote(remote_dir),
            ENCRYPTED_ENV_FILE,
            shell_quote(&up)
        )
    } else {
        format!("cd {} && {}", shell_quote(remote_dir), up)
    }
}

/// Remote operations bound to one session and transfer method
pub struct RemoteOperations<'a> {
    session: &'a dyn RemoteSession,
    transfer: &'a dyn FileTransfer,
    target: &'a DeploymentTarget,
}

impl<'a> RemoteOperations<'a> {
    pub fn new(
        session: &'a dyn RemoteSession,
        transfer: &'a dyn FileTransfer,
        target: &'a DeploymentTarget,
    ) -> Self {
        Self {
            session,
            transfer,
            target,
        }
    }

    /// `mkdir -p` the directory; succeeds if it already exists
    pub fn ensure_directory(&self, remote_dir: &str) -> Result<(), RemoteError> {
        self.run(
            "ensure directory",
            &format!("mkdir -p {}", shell_quote(remote_dir)),
        )
    }

    /// Copy a local file into `remote_dir`
    pub fn upload(&self, local: &Path, remote_dir: &str) -> Result<(), RemoteError> {
        debug!(
            file = %local.display(),
            remote_dir,
            method = self.transfer.name(),
            "Uploading file"
        );
        self.transfer.upload(local, self.target, remote_dir)?;
        Ok(())
    }

    /// Bring the compose project in `remote_dir` up in the background
    pub fn activate_compose(&self, remote_dir: &str, with_secrets: bool) -> Result<(), RemoteError> {
        self.run(
            "activate compose",
            &activate_command(remote_dir, with_secrets),
        )
    }

    /// Load an uploaded image archive into the host's docker, then delete it
    pub fn load_image_archive(&self, remote_dir: &str, archive_name: &str) -> Result<(), RemoteError> {
        let path = format!("{}/{}", remote_dir.trim_end_matches('/'), archive_name);
        self.run(
            "load image archive",
            &format!(
                "docker load -i {path} && rm {path}",
                path = shell_quote(&path)
            ),
        )
    }

    fn run(&self, operation: &str, command: &str) -> Result<(), RemoteError> {
        debug!(operation, command, "Running remote command");
        let output = self.session.run(command)?;
        if output.success() {
            Ok(())
        } else {
            Err(RemoteError::CommandFailed {
                operation: operation.to_string(),
                exit_code: output.exit_code,
                stderr: output.stderr.trim().to_string(),
            })
        }
    }
}
