//! External tool adapters
//!
//! Ports implemented by shelling out to the tools a deployment needs on the
//! local machine.

mod docker;
mod git;
mod sops;

pub use docker::DockerCli;
pub use git::GitCli;
pub use sops::SopsEncryptor;
