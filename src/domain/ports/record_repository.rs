//! RecordRepository port - abstraction for deployment record persistence
//!
//! This trait allows the pipeline to load/save `sidekick.yml`
//! without knowing about YAML serialization details.

use std::path::{Path, PathBuf};

use crate::domain::entities::DeploymentRecord;

/// Result type for record operations
pub type RecordResult<T> = Result<T, RecordError>;

/// Record operation errors
#[derive(Debug)]
pub enum RecordError {
    /// No record yet: the app was never launched from this directory
    NotInitialized { path: PathBuf },
    /// File exists but cannot be parsed
    Corrupted { path: PathBuf, message: String },
    /// I/O error
    Io { path: PathBuf, message: String },
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::NotInitialized { path } => write!(
                f,
                "No deployment record at {} - run `sidekick launch` first",
                path.display()
            ),
            RecordError::Corrupted { path, message } => {
                write!(f, "Deployment record {} is corrupted: {}", path.display(), message)
            }
            RecordError::Io { path, message } => {
                write!(f, "I/O error on {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for RecordError {}

/// Abstract repository for the deployment record
pub trait RecordRepository {
    /// Path of the record file managed by this repository
    fn path(&self) -> &Path;

    fn exists(&self) -> bool {
        self.path().exists()
    }

    fn load(&self) -> RecordResult<DeploymentRecord>;

    /// Overwrite the record, creating it if absent
    fn save(&self, record: &DeploymentRecord) -> RecordResult<()>;
}
