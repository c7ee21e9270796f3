//! Deploy Use Case
//!
//! Runs the deployment pipeline, one stage at a time:
//! 1. Check local preconditions (Dockerfile, env file, required settings)
//! 2. Log into the host
//! 3. Build and publish the image
//! 4. Encrypt secrets and write the compose file to a staging directory
//! 5. Create the remote directory
//! 6. Copy the staged files
//! 7. Start the compose project
//! 8. Save the deployment record
//!
//! Any failure stops the run. Nothing is rolled back on the host; only the
//! staged files are cleaned up.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::domain::entities::{DeploymentRecord, EnvSettings, PreviewEnvironment};
use crate::domain::ports::{
    DeployEvent, DeployEventSink, FileTransfer, ImagePublisher, NoopEventSink, PublishRequest,
    RecordError, RecordRepository, RemoteConnector, SecretEncryptor, Stage,
};
use crate::domain::services::{
    build_descriptor, render, RemoteOperations, Route, COMPOSE_FILE,
};
use crate::domain::value_objects::{DeploymentKind, Timestamp};
use crate::error::{PreconditionError, SidekickError};

use super::options::DeployOptions;
use super::result::{DeployError, DeployResult};
use super::secrets::{changed_since, prepare_secrets, PreparedSecrets};
use super::staging::Staging;

/// Collaborators the pipeline talks to
pub struct DeployPorts {
    pub connector: Box<dyn RemoteConnector>,
    pub transfer: Box<dyn FileTransfer>,
    pub publisher: Box<dyn ImagePublisher>,
    pub encryptor: Box<dyn SecretEncryptor>,
    pub records: Box<dyn RecordRepository>,
}

/// Deploy use case - orchestrates one deployment
pub struct DeployUseCase {
    config: ServerConfig,
    ports: DeployPorts,
}

impl DeployUseCase {
    pub fn new(config: ServerConfig, ports: DeployPorts) -> Self {
        Self { config, ports }
    }

    /// Execute the deploy use case
    pub fn execute(&self, options: &DeployOptions) -> Result<DeployResult, DeployError> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the deploy use case with event reporting
    pub fn execute_with_events(
        &self,
        options: &DeployOptions,
        events: Arc<dyn DeployEventSink>,
    ) -> Result<DeployResult, DeployError> {
        let route = self.route(options);
        info!(
            app = %options.app,
            kind = %options.kind,
            host = %route.hostname,
            "Starting deployment"
        );
        events.on_event(DeployEvent::Started {
            app: options.app.to_string(),
            kind: options.kind.to_string(),
            host: route.hostname.clone(),
        });

        let result = self.run_pipeline(options, &route, events.as_ref());

        match &result {
            Ok(done) => {
                info!(url = %done.url, "Deployment finished");
                events.on_event(DeployEvent::Completed {
                    url: done.url.clone(),
                });
            }
            Err(err) => warn!(stage = ?err.stage, error = %err.source, "Deployment aborted"),
        }
        result
    }

    fn route(&self, options: &DeployOptions) -> Route {
        match &options.kind {
            DeploymentKind::Primary => Route::primary(
                &options.app,
                self.config.docker_username.as_deref().unwrap_or_default(),
                options.app_host.clone(),
                options.port.clone(),
            ),
            DeploymentKind::Preview(revision) => Route::preview(
                &options.app,
                revision,
                &options.app_host,
                options.port.clone(),
            ),
        }
    }

    fn run_pipeline(
        &self,
        options: &DeployOptions,
        route: &Route,
        events: &dyn DeployEventSink,
    ) -> Result<DeployResult, DeployError> {
        let env_file = options.resolved_env_file();

        run_stage(events, Stage::Init, || self.check_preconditions(options))?;

        let target = self.config.target();
        let session = run_stage(events, Stage::Authenticated, || {
            Ok(self.ports.connector.connect(&target)?)
        })?;
        let remote = RemoteOperations::new(session.as_ref(), self.ports.transfer.as_ref(), &target);
        let remote_dir = options.remote_dir();

        run_stage(events, Stage::ImageReady, || {
            let request = publish_request(options, route);
            Ok(self.ports.publisher.publish(&request, &remote)?)
        })?;

        // Dropping `staged` removes every staged file, whichever stage fails.
        let staged = run_stage(events, Stage::DescriptorWritten, || {
            let staging = Staging::create(&options.staging_parent)?;
            let secrets = match &env_file {
                Some(file) => Some(prepare_secrets(
                    file,
                    &staging,
                    self.ports.encryptor.as_ref(),
                )?),
                None => None,
            };
            let environment = secrets
                .as_ref()
                .map(|s| s.environment.clone())
                .unwrap_or_default();
            let document = build_descriptor(route, &self.config.routing_settings(), environment);
            let compose = staging.write(COMPOSE_FILE, &render(&document)?)?;
            Ok(StagedFiles {
                _staging: staging,
                compose,
                secrets,
            })
        })?;
        let secrets = staged.secrets.as_ref();

        run_stage(events, Stage::RemoteDirectoryReady, || {
            Ok(remote.ensure_directory(&remote_dir)?)
        })?;

        run_stage(events, Stage::Transferred, || {
            remote.upload(&staged.compose, &remote_dir)?;
            if let Some(secrets) = secrets {
                remote.upload(&secrets.artifact, &remote_dir)?;
            }
            Ok(())
        })?;

        run_stage(events, Stage::RemoteActivated, || {
            Ok(remote.activate_compose(&remote_dir, secrets.is_some())?)
        })?;

        let env_changed = secrets.and_then(|s| {
            let previous = options.previous.as_ref().and_then(|r| r.env.hash.as_ref());
            changed_since(previous, &s.checksum)
        });
        if env_changed == Some(true) {
            events.on_event(DeployEvent::Warning {
                message: "env file changed since the last deploy".to_string(),
            });
        }

        let record = run_stage(events, Stage::RecordPersisted, || {
            let record = self.next_record(options, route, secrets)?;
            self.ports.records.save(&record)?;
            Ok(record)
        })?;

        drop(staged);

        Ok(DeployResult {
            url: route.public_url(),
            image: route.image.clone(),
            record,
            env_changed,
        })
    }

    fn check_preconditions(&self, options: &DeployOptions) -> Result<(), SidekickError> {
        self.config.validate()?;

        if !options.dockerfile().is_file() {
            return Err(PreconditionError::MissingDockerfile {
                dir: options.project_root.clone(),
            }
            .into());
        }

        if let Some(file) = options.resolved_env_file() {
            if !file.is_file() {
                return Err(PreconditionError::MissingEnvFile { path: file }.into());
            }
            self.config.require_age_public_key()?;
        }

        match &options.kind {
            DeploymentKind::Primary => {
                self.config.require_docker_username()?;
            }
            DeploymentKind::Preview(_) => {
                if options.previous.is_none() {
                    return Err(self.not_launched());
                }
            }
        }
        Ok(())
    }

    fn next_record(
        &self,
        options: &DeployOptions,
        route: &Route,
        secrets: Option<&PreparedSecrets>,
    ) -> Result<DeploymentRecord, SidekickError> {
        let now = Timestamp::now();
        let checksum = secrets.map(|s| s.checksum.clone());

        let record = match (&options.kind, options.previous.clone()) {
            (DeploymentKind::Primary, None) => DeploymentRecord::launched(
                options.app.clone(),
                route.image.clone(),
                options.port.clone(),
                route.hostname.clone(),
                EnvSettings {
                    file: options.env_file.clone(),
                    hash: checksum,
                },
                now,
            ),
            (DeploymentKind::Primary, Some(mut record)) => {
                record.env.file = options.env_file.clone();
                record.record_primary_deploy(
                    route.image.clone(),
                    options.port.clone(),
                    route.hostname.clone(),
                    checksum,
                    now,
                );
                record
            }
            (DeploymentKind::Preview(_), None) => return Err(self.not_launched()),
            (DeploymentKind::Preview(revision), Some(mut record)) => {
                record.record_preview(
                    revision,
                    PreviewEnvironment {
                        url: route.public_url(),
                        image: route.image.clone(),
                        created_at: now,
                    },
                );
                record
            }
        };
        Ok(record)
    }

    fn not_launched(&self) -> SidekickError {
        RecordError::NotInitialized {
            path: self.ports.records.path().to_path_buf(),
        }
        .into()
    }
}

/// Files staged for upload; removed when dropped
struct StagedFiles {
    _staging: Staging,
    compose: PathBuf,
    secrets: Option<PreparedSecrets>,
}

fn publish_request(options: &DeployOptions, route: &Route) -> PublishRequest {
    match &options.kind {
        DeploymentKind::Primary => PublishRequest::Registry {
            image: route.image.clone(),
            context: options.project_root.clone(),
        },
        DeploymentKind::Preview(revision) => PublishRequest::Archive {
            image: route.image.clone(),
            context: options.project_root.clone(),
            archive_name: format!("{}-{}.tar", options.app, revision),
            remote_dir: options.app.to_string(),
        },
    }
}

/// Run one stage, reporting start, completion or failure
fn run_stage<T>(
    events: &dyn DeployEventSink,
    stage: Stage,
    body: impl FnOnce() -> Result<T, SidekickError>,
) -> Result<T, DeployError> {
    info!(stage = ?stage, "{}", stage.label());
    if events.wants_detailed_events() {
        events.on_event(DeployEvent::StageStarted { stage });
    }

    match body() {
        Ok(value) => {
            if events.wants_detailed_events() {
                events.on_event(DeployEvent::StageCompleted { stage });
            }
            Ok(value)
        }
        Err(source) => {
            events.on_event(DeployEvent::StageFailed {
                stage,
                error: source.to_string(),
            });
            Err(DeployError::new(stage, source))
        }
    }
}
