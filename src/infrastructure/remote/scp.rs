//! SCP Transfer
//!
//! Fallback when rsync is not installed, particularly on Windows systems
//! with OpenSSH. The remote directory must already exist.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use super::ssh::ssh_options;
use super::transfer::run_copy;
use crate::domain::ports::{FileTransfer, TransferError};
use crate::domain::value_objects::DeploymentTarget;

/// Transfer using scp
pub struct ScpTransfer;

impl ScpTransfer {
    /// Check if scp is installed and available
    pub fn check_available() -> bool {
        // scp without args returns non-zero, but if we can spawn it, it's available
        Command::new("scp")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }

    fn command(local: &Path, target: &DeploymentTarget, remote_dir: &str) -> Command {
        let mut cmd = Command::new("scp");
        cmd.arg("-q")
            .args(ssh_options())
            .arg(local)
            .arg(target.remote_spec(remote_dir));
        cmd
    }
}

impl FileTransfer for ScpTransfer {
    fn name(&self) -> &'static str {
        "scp"
    }

    fn upload(
        &self,
        local: &Path,
        target: &DeploymentTarget,
        remote_dir: &str,
    ) -> Result<(), TransferError> {
        let destination = target.remote_spec(remote_dir);
        debug!(file = %local.display(), %destination, "scp upload");

        let failed = |message: String| TransferError::Failed {
            file: local.to_path_buf(),
            destination: destination.clone(),
            message,
        };

        let output = run_copy(Self::command(local, target, remote_dir))
            .map_err(|e| failed(format!("failed to run scp: {}", e)))?;

        if !output.status.success() {
            return Err(failed(format!(
                "scp exited with {:?}: {}",
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(())
    }
}
