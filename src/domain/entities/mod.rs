//! Domain Entities
//!
//! - `ComposeDocument` - the ephemeral descriptor handed to `docker compose`
//! - `DeploymentRecord` - durable per-app state stored in `sidekick.yml`

mod compose;
mod record;

pub use compose::{ComposeDocument, NetworkDescriptor, ServiceDescriptor};
pub use record::{DeploymentRecord, EnvSettings, PreviewEnvironment};
