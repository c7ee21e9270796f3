//! Error types for Sidekick
//!
//! Every port has its own error enum; `SidekickError` unifies them for the
//! application layer and the CLI.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::ports::{
    PromptError, PublishError, RecordError, RemoteError, SecretError, TransferError, VcsError,
};
use crate::domain::services::DescriptorError;
use crate::domain::value_objects::ValidationError;

/// Result type alias for Sidekick operations
pub type SidekickResult<T> = Result<T, SidekickError>;

/// Main error type for Sidekick operations
#[derive(Error, Debug)]
pub enum SidekickError {
    /// Global settings missing or unreadable
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Deployment record missing or unreadable
    #[error(transparent)]
    Record(#[from] RecordError),

    /// A precondition for the requested command does not hold
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    /// Invalid user input (app name, port, revision)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Remote login or remote command failure
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// File copy to the remote host failed
    #[error(transparent)]
    Transfer(#[from] TransferError),

    /// Image build or publish failed
    #[error(transparent)]
    Publish(#[from] PublishError),

    /// Env file encryption failed
    #[error(transparent)]
    Secret(#[from] SecretError),

    /// Compose document could not be rendered
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// Source control query failed
    #[error(transparent)]
    Vcs(#[from] VcsError),

    /// Interactive input failed
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// IO error
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Conditions checked before any side effect happens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    /// Preview deploys need every change committed
    #[error("working tree has uncommitted changes - commit them before deploying a preview")]
    DirtyWorkingTree,

    /// No Dockerfile in the project root
    #[error("no Dockerfile found in {dir}")]
    MissingDockerfile { dir: PathBuf },

    /// `launch` was run for an app that already has a record
    #[error("{path} already exists - use `sidekick deploy` to redeploy this app")]
    AlreadyLaunched { path: PathBuf },

    /// Configured env file does not exist
    #[error("env file not found: {path}")]
    MissingEnvFile { path: PathBuf },
}
