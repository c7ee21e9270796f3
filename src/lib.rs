//! Sidekick - deploy containerized apps to your own VPS
//!
//! Sidekick takes the Docker build context in the current directory, publishes
//! an image, renders a compose file with reverse-proxy routing labels and
//! brings the service up on a remote host over SSH. Revision-scoped preview
//! deployments live next to the primary app under their own hostname.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::ServerConfig;
pub use domain::entities::{ComposeDocument, DeploymentRecord, PreviewEnvironment};
pub use domain::value_objects::{AppName, ContainerPort, DeploymentKind, RevisionHash};
pub use error::{SidekickError, SidekickResult};
