//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{DeployPorts, DeployUseCase};
use crate::config::ServerConfig;
use crate::error::SidekickResult;
use crate::infrastructure::{
    detect_transfer, DockerCli, SopsEncryptor, SshConnector, YamlRecordRepository,
};

/// Create a deploy use case talking to the configured host
///
/// Fails when no copy tool (rsync or scp) is installed locally.
pub fn create_deploy_use_case(
    config: &ServerConfig,
    project_root: &Path,
) -> SidekickResult<DeployUseCase> {
    let ports = DeployPorts {
        connector: Box::new(SshConnector::new()),
        transfer: detect_transfer()?,
        publisher: Box::new(DockerCli::new()),
        encryptor: Box::new(SopsEncryptor::new(
            config.age_public_key.clone().unwrap_or_default(),
        )),
        records: Box::new(create_record_repository(project_root)),
    };

    Ok(DeployUseCase::new(config.clone(), ports))
}

/// Record repository for the project in `project_root`
pub fn create_record_repository(project_root: &Path) -> YamlRecordRepository {
    YamlRecordRepository::in_project(project_root)
}
