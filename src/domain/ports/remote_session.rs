//! Remote Session Port
//!
//! Command execution on the deployment host. Implementations own transport,
//! authentication and timeouts; the pipeline only sees exit status and output.

use thiserror::Error;

use super::file_transfer::TransferError;
use crate::domain::value_objects::DeploymentTarget;

/// Captured result of one remote command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// `None` when the command was killed by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Remote operation errors
#[derive(Error, Debug)]
pub enum RemoteError {
    /// Transport could not be started at all
    #[error("could not reach {destination}: {message}")]
    Connection { destination: String, message: String },

    /// Host reachable but login was refused
    #[error("logging into {destination} failed: {stderr}")]
    AuthenticationFailed { destination: String, stderr: String },

    /// A named remote operation exited unsuccessfully
    #[error("remote {operation} failed ({}): {stderr}", describe_exit(.exit_code))]
    CommandFailed {
        operation: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    /// Copying a file to the host failed
    #[error(transparent)]
    Transfer(#[from] TransferError),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// An authenticated session on the deployment host
pub trait RemoteSession {
    /// Run a shell command in the remote user's home directory
    ///
    /// Returns `Err` only when the command could not be executed; a non-zero
    /// exit status is reported through `CommandOutput`.
    fn run(&self, command: &str) -> Result<CommandOutput, RemoteError>;
}

/// Opens sessions; the orchestrator's first stage
pub trait RemoteConnector {
    fn connect(&self, target: &DeploymentTarget) -> Result<Box<dyn RemoteSession>, RemoteError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_display_includes_exit_code() {
        let err = RemoteError::CommandFailed {
            operation: "activate compose".to_string(),
            exit_code: Some(1),
            stderr: "no such service".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "remote activate compose failed (exit code 1): no such service"
        );
    }

    #[test]
    fn command_failed_display_handles_signal() {
        let err = RemoteError::CommandFailed {
            operation: "ensure directory".to_string(),
            exit_code: None,
            stderr: String::new(),
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn output_success_requires_zero_exit() {
        let ok = CommandOutput {
            exit_code: Some(0),
            ..Default::default()
        };
        let killed = CommandOutput::default();
        assert!(ok.success());
        assert!(!killed.success());
    }
}
