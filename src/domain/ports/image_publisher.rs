//! ImagePublisher port - builds the app image and gets it onto the host
//!
//! Primary deployments go through a registry. Previews skip the registry: the
//! image is saved as an archive, copied over and loaded on the host.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::remote_session::RemoteError;
use crate::domain::services::RemoteOperations;

/// What to build and where it must end up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishRequest {
    /// Build `image` and push it to the registry
    Registry { image: String, context: PathBuf },
    /// Build `image`, ship it as an archive into `remote_dir` and load it there
    Archive {
        image: String,
        context: PathBuf,
        /// Archive file name, unique per app and revision
        archive_name: String,
        remote_dir: String,
    },
}

impl PublishRequest {
    pub fn image(&self) -> &str {
        match self {
            PublishRequest::Registry { image, .. } | PublishRequest::Archive { image, .. } => image,
        }
    }

    pub fn context(&self) -> &Path {
        match self {
            PublishRequest::Registry { context, .. } | PublishRequest::Archive { context, .. } => {
                context
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("{0} is not installed or not on PATH")]
    ToolMissing(String),

    /// Captured build output is kept verbatim
    #[error("building image {image} failed:\n{stderr}")]
    BuildFailed { image: String, stderr: String },

    #[error("pushing image {image} failed:\n{stderr}")]
    PushFailed { image: String, stderr: String },

    #[error("saving image {image} to an archive failed:\n{stderr}")]
    ArchiveFailed { image: String, stderr: String },

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("IO error while publishing: {0}")]
    Io(#[from] std::io::Error),
}

pub trait ImagePublisher {
    fn publish(
        &self,
        request: &PublishRequest,
        remote: &RemoteOperations<'_>,
    ) -> Result<(), PublishError>;
}
