//! Transient file staging
//!
//! Files that only exist to be uploaded (the compose file, the encrypted env
//! file) are written to a private directory that is removed when the guard
//! is dropped, on success and on every early return.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::SidekickError;

pub struct Staging {
    dir: TempDir,
}

impl Staging {
    /// Create a fresh staging directory under `parent`
    pub fn create(parent: &Path) -> Result<Self, SidekickError> {
        let dir = tempfile::Builder::new()
            .prefix("sidekick-")
            .tempdir_in(parent)
            .map_err(|source| SidekickError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path for a file another tool will create
    pub fn reserve(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `contents` to `name` and return its path
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf, SidekickError> {
        let path = self.reserve(name);
        fs::write(&path, contents).map_err(|source| SidekickError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
