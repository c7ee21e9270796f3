//! Deploy Result
//!
//! Result and error types for deploy operations.

use thiserror::Error;

use crate::domain::entities::DeploymentRecord;
use crate::domain::ports::Stage;
use crate::error::SidekickError;

/// Result of a successful deployment
#[derive(Debug, Clone)]
pub struct DeployResult {
    /// `https://` URL the deployment is served on
    pub url: String,
    /// Image reference written into the compose file
    pub image: String,
    /// Record as persisted after this run
    pub record: DeploymentRecord,
    /// Whether the env file changed since the last deploy (`None` if unknown)
    pub env_changed: Option<bool>,
}

/// A pipeline failure, tagged with the stage it happened in
#[derive(Error, Debug)]
#[error("{stage} failed: {source}")]
pub struct DeployError {
    pub stage: Stage,
    #[source]
    pub source: SidekickError,
}

impl DeployError {
    pub fn new(stage: Stage, source: impl Into<SidekickError>) -> Self {
        Self {
            stage,
            source: source.into(),
        }
    }
}
