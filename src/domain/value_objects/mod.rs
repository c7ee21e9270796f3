//! Domain Value Objects
//!
//! Immutable, validated values the deployment pipeline passes around.

mod app_name;
mod hash;
mod kind;
mod port;
mod revision;
mod target;
mod timestamp;

pub use app_name::AppName;
pub use hash::ContentHash;
pub use kind::DeploymentKind;
pub use port::ContainerPort;
pub use revision::RevisionHash;
pub use target::DeploymentTarget;
pub use timestamp::Timestamp;

use thiserror::Error;

/// Rejected user-supplied value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("app name must not be empty")]
    EmptyAppName,

    #[error("app name '{0}' must use lowercase letters, digits and '-' only")]
    InvalidAppName(String),

    #[error("a port to accept requests is required")]
    EmptyPort,

    #[error("invalid revision hash '{0}'")]
    InvalidRevision(String),
}
