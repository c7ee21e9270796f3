//! Deploy Module
//!
//! Orchestrates launch, redeploy and preview deployments.
//!
//! ## Structure
//!
//! - `options` - What to deploy (`DeployOptions`)
//! - `result` - Outcome types (`DeployResult`, `DeployError`)
//! - `secrets` - Env file encryption and compose environment
//! - `staging` - Transient files removed on drop
//! - `use_case` - The pipeline (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use sidekick::application::deploy::{DeployOptions, DeployPorts, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(config, ports);
//! let result = use_case.execute(&DeployOptions::redeploy(root, record))?;
//! ```

mod options;
mod result;
mod secrets;
mod staging;
mod use_case;

pub use options::DeployOptions;
pub use result::{DeployError, DeployResult};
pub use secrets::{changed_since, parse_env_keys, prepare_secrets, PreparedSecrets};
pub use staging::Staging;
pub use use_case::{DeployPorts, DeployUseCase};
