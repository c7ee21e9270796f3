//! Docker CLI image publisher
//!
//! Builds with the local `docker` client. Primary images are pushed to the
//! registry the client is logged into; preview images are saved to a tar
//! archive, copied to the host and loaded there.

use std::process::{Command, Output, Stdio};

use tempfile::TempDir;
use tracing::{debug, info};

use crate::domain::ports::{ImagePublisher, PublishError, PublishRequest};
use crate::domain::services::RemoteOperations;

/// Image publisher backed by the `docker` command
#[derive(Debug, Clone)]
pub struct DockerCli {
    program: String,
}

impl Default for DockerCli {
    fn default() -> Self {
        Self {
            program: "docker".to_string(),
        }
    }
}

impl DockerCli {
    pub fn new() -> Self {
        Self::default()
    }

    fn run(&self, args: &[&str]) -> Result<Output, PublishError> {
        debug!(program = %self.program, ?args, "Running docker");
        Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => PublishError::ToolMissing(self.program.clone()),
                _ => PublishError::Io(e),
            })
    }

    fn build(&self, request: &PublishRequest) -> Result<(), PublishError> {
        let context = request.context().to_string_lossy().to_string();
        let output = self.run(&["build", "-t", request.image(), &context])?;
        if !output.status.success() {
            return Err(PublishError::BuildFailed {
                image: request.image().to_string(),
                stderr: stderr_of(&output),
            });
        }
        Ok(())
    }

    fn push(&self, image: &str) -> Result<(), PublishError> {
        let output = self.run(&["push", image])?;
        if !output.status.success() {
            return Err(PublishError::PushFailed {
                image: image.to_string(),
                stderr: stderr_of(&output),
            });
        }
        Ok(())
    }

    fn ship_archive(
        &self,
        image: &str,
        archive_name: &str,
        remote_dir: &str,
        remote: &RemoteOperations<'_>,
    ) -> Result<(), PublishError> {
        let scratch = TempDir::with_prefix("sidekick-image-")?;
        let archive = scratch.path().join(archive_name);
        let archive_arg = archive.to_string_lossy().to_string();

        let output = self.run(&["save", "-o", &archive_arg, image])?;
        if !output.status.success() {
            return Err(PublishError::ArchiveFailed {
                image: image.to_string(),
                stderr: stderr_of(&output),
            });
        }

        remote.ensure_directory(remote_dir)?;
        remote.upload(&archive, remote_dir)?;
        remote.load_image_archive(remote_dir, archive_name)?;
        Ok(())
    }
}

impl ImagePublisher for DockerCli {
    fn publish(
        &self,
        request: &PublishRequest,
        remote: &RemoteOperations<'_>,
    ) -> Result<(), PublishError> {
        self.build(request)?;
        info!(image = request.image(), "Image built");

        match request {
            PublishRequest::Registry { image, .. } => self.push(image),
            PublishRequest::Archive {
                image,
                archive_name,
                remote_dir,
                ..
            } => self.ship_archive(image, archive_name, remote_dir, remote),
        }
    }
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}
