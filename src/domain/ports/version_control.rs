//! VersionControl port - working tree state and revision lookup

use std::path::Path;

use thiserror::Error;

use crate::domain::value_objects::RevisionHash;

#[derive(Error, Debug)]
pub enum VcsError {
    #[error("git is not installed or not on PATH: {0}")]
    Unavailable(String),

    #[error("`{command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("could not parse revision: {0}")]
    InvalidRevision(String),
}

pub trait VersionControl {
    /// True when there are no uncommitted or untracked changes
    fn is_clean(&self, root: &Path) -> Result<bool, VcsError>;

    /// Abbreviated hash of HEAD
    fn short_revision(&self, root: &Path) -> Result<RevisionHash, VcsError>;
}
