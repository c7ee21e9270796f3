//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)

pub mod cli;
pub mod factory;

pub use factory::{create_deploy_use_case, create_record_repository};
