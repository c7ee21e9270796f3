//! File Transfer Port
//!
//! Copies local artifacts (compose file, encrypted env, image archives) into a
//! directory on the deployment host.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::DeploymentTarget;

#[derive(Error, Debug)]
pub enum TransferError {
    /// No usable copy tool on this machine
    #[error("no transfer method available: {0}")]
    NotAvailable(String),

    /// The copy tool ran but reported failure
    #[error("copying {} to {destination} failed: {message}", .file.display())]
    Failed {
        file: PathBuf,
        destination: String,
        message: String,
    },
}

pub trait FileTransfer {
    /// Name of the transfer method (for logging)
    fn name(&self) -> &'static str;

    /// Copy `local` into `remote_dir` (relative to the remote home)
    fn upload(
        &self,
        local: &Path,
        target: &DeploymentTarget,
        remote_dir: &str,
    ) -> Result<(), TransferError>;
}
