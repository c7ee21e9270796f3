//! SSH Remote Session
//!
//! Runs commands through the system `ssh` client. Authentication, host keys
//! and timeouts are whatever the user's SSH configuration says; sessions are
//! multiplexed over one control connection so each stage does not log in
//! again.

use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::{CommandOutput, RemoteConnector, RemoteError, RemoteSession};
use crate::domain::value_objects::DeploymentTarget;

/// Exit status `ssh` uses for its own failures
const SSH_ERROR_EXIT: i32 = 255;

/// Opens SSH sessions with the system client
#[derive(Debug, Clone, Copy, Default)]
pub struct SshConnector;

impl SshConnector {
    pub fn new() -> Self {
        Self
    }
}

impl RemoteConnector for SshConnector {
    fn connect(&self, target: &DeploymentTarget) -> Result<Box<dyn RemoteSession>, RemoteError> {
        let session = SshSession::new(target.ssh_destination());
        let output = session.run("true")?;

        if output.success() {
            debug!(destination = %session.destination, "SSH session established");
            return Ok(Box::new(session));
        }

        Err(classify_login_failure(&session.destination, &output))
    }
}

/// An SSH destination commands are sent to
#[derive(Debug, Clone)]
pub struct SshSession {
    destination: String,
}

impl SshSession {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new("ssh");
        cmd.args(ssh_options()).arg(&self.destination);
        cmd
    }
}

impl RemoteSession for SshSession {
    fn run(&self, command: &str) -> Result<CommandOutput, RemoteError> {
        let output = self
            .command()
            .arg(command)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| RemoteError::Connection {
                destination: self.destination.clone(),
                message: format!("failed to run ssh: {}", e),
            })?;

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Options shared by `ssh` and the copy tools
pub(crate) fn ssh_options() -> Vec<String> {
    vec![
        "-o".to_string(),
        "BatchMode=yes".to_string(),
        "-o".to_string(),
        "ControlMaster=auto".to_string(),
        "-o".to_string(),
        "ControlPath=/tmp/sidekick-ssh-%r@%h:%p".to_string(),
        "-o".to_string(),
        "ControlPersist=60".to_string(),
    ]
}

fn classify_login_failure(destination: &str, output: &CommandOutput) -> RemoteError {
    let stderr = output.stderr.trim().to_string();
    let refused = stderr.contains("Permission denied") || stderr.contains("Host key verification failed");
    if output.exit_code == Some(SSH_ERROR_EXIT) && !refused {
        RemoteError::Connection {
            destination: destination.to_string(),
            message: stderr,
        }
    } else {
        RemoteError::AuthenticationFailed {
            destination: destination.to_string(),
            stderr,
        }
    }
}
