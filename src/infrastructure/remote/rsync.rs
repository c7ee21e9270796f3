//! Rsync Transfer
//!
//! Preferred copy tool on Unix systems. Interrupted uploads of large image
//! archives resume with `--partial`.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use super::transfer::{run_copy, ssh_command_line};
use crate::domain::ports::{FileTransfer, TransferError};
use crate::domain::value_objects::DeploymentTarget;

/// Transfer using rsync over SSH
pub struct RsyncTransfer;

impl RsyncTransfer {
    /// Check if rsync is installed and available
    pub fn check_available() -> bool {
        Command::new("rsync")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn command(local: &Path, target: &DeploymentTarget, remote_dir: &str) -> Command {
        let mut cmd = Command::new("rsync");
        cmd.arg("-az")
            .arg("--partial")
            .arg("-e")
            .arg(ssh_command_line())
            .arg(local)
            .arg(target.remote_spec(remote_dir));
        cmd
    }
}

impl FileTransfer for RsyncTransfer {
    fn name(&self) -> &'static str {
        "rsync"
    }

    fn upload(
        &self,
        local: &Path,
        target: &DeploymentTarget,
        remote_dir: &str,
    ) -> Result<(), TransferError> {
        let destination = target.remote_spec(remote_dir);
        debug!(file = %local.display(), %destination, "rsync upload");

        let failed = |message: String| TransferError::Failed {
            file: local.to_path_buf(),
            destination: destination.clone(),
            message,
        };

        let output = run_copy(Self::command(local, target, remote_dir))
            .map_err(|e| failed(format!("failed to run rsync: {}", e)))?;

        if !output.status.success() {
            return Err(failed(format!(
                "rsync exited with {:?}: {}",
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsync_transfer_name() {
        assert_eq!(RsyncTransfer.name(), "rsync");
    }

    #[test]
    fn check_available_does_not_panic() {
        let _ = RsyncTransfer::check_available();
    }

    #[test]
    fn command_copies_file_into_remote_dir() {
        let target = DeploymentTarget::new("203.0.113.7", "sidekick");
        let cmd = RsyncTransfer::command(Path::new("/tmp/stage/docker-compose.yaml"), &target, "shop");
        let args: Vec<String> = cmd
            .get_args()
            .map(|a| a.to_string_lossy().to_string())
            .collect();

        assert_eq!(args[0], "-az");
        assert_eq!(args[args.len() - 2], "/tmp/stage/docker-compose.yaml");
        assert_eq!(args[args.len() - 1], "sidekick@203.0.113.7:./shop/");
    }
}
