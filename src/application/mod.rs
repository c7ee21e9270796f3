//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Runs the deployment pipeline (launch, redeploy, preview)
//! - `gather_launch_answers` - Interactive questions for a first deployment
//! - `plan_preview` - Clean-tree check and revision lookup for previews

pub mod deploy;
pub mod launch;
pub mod preview;

pub use deploy::{DeployError, DeployOptions, DeployPorts, DeployResult, DeployUseCase};
pub use launch::{
    detect_exposed_port, gather_launch_answers, launch_defaults, LaunchAnswers, LaunchDefaults,
};
pub use preview::plan_preview;
