//! YAML Record Repository
//!
//! Implements the RecordRepository port on top of `sidekick.yml` in the
//! project root.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::entities::DeploymentRecord;
use crate::domain::ports::record_repository::{RecordError, RecordRepository, RecordResult};

/// File name of the per-project record
pub const RECORD_FILE: &str = "sidekick.yml";

/// YAML-based record repository
pub struct YamlRecordRepository {
    path: PathBuf,
}

impl YamlRecordRepository {
    /// Repository for `sidekick.yml` in `project_root`
    pub fn in_project(project_root: &Path) -> Self {
        Self::new(project_root.join(RECORD_FILE))
    }

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, e: impl ToString) -> RecordError {
        RecordError::Io {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }
}

impl RecordRepository for YamlRecordRepository {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> RecordResult<DeploymentRecord> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RecordError::NotInitialized {
                    path: self.path.clone(),
                })
            }
            Err(e) => {
                return Err(RecordError::Corrupted {
                    path: self.path.clone(),
                    message: e.to_string(),
                })
            }
        };

        serde_yaml_ng::from_str(&content).map_err(|e| RecordError::Corrupted {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Write to a temp file next to the record, then rename over it
    fn save(&self, record: &DeploymentRecord) -> RecordResult<()> {
        let yaml = serde_yaml_ng::to_string(record).map_err(|e| self.io_error(e))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(yaml.as_bytes())
            .map_err(|e| self.io_error(e))?;
        tmp.flush().map_err(|e| self.io_error(e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(tmp.path(), fs::Permissions::from_mode(0o600))
                .map_err(|e| self.io_error(e))?;
        }

        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{EnvSettings, PreviewEnvironment};
    use crate::domain::value_objects::{AppName, ContainerPort, RevisionHash, Timestamp};
    use tempfile::tempdir;

    fn record() -> DeploymentRecord {
        let mut record = DeploymentRecord::launched(
            AppName::parse("shop").unwrap(),
            "alice/shop",
            ContainerPort::parse("3000").unwrap(),
            "shop.example.com",
            EnvSettings {
                file: Some(PathBuf::from(".env")),
                hash: None,
            },
            Timestamp::now(),
        );
        record.record_preview(
            &RevisionHash::parse("abc123").unwrap(),
            PreviewEnvironment {
                url: "https://abc123.shop.example.com".to_string(),
                image: "shop:abc123".to_string(),
                created_at: Timestamp::now(),
            },
        );
        record
    }

    #[test]
    fn load_missing_record_is_not_initialized() {
        let dir = tempdir().unwrap();
        let repo = YamlRecordRepository::in_project(dir.path());

        assert!(!repo.exists());
        assert!(matches!(
            repo.load(),
            Err(RecordError::NotInitialized { .. })
        ));
    }

    #[test]
    fn load_garbage_is_corrupted() {
        let dir = tempdir().unwrap();
        let repo = YamlRecordRepository::in_project(dir.path());
        fs::write(repo.path(), "name: [shop\n").unwrap();

        assert!(matches!(repo.load(), Err(RecordError::Corrupted { .. })));
    }

    #[test]
    fn load_record_missing_fields_is_corrupted() {
        let dir = tempdir().unwrap();
        let repo = YamlRecordRepository::in_project(dir.path());
        fs::write(repo.path(), "name: shop\n").unwrap();

        match repo.load() {
            Err(RecordError::Corrupted { message, .. }) => assert!(message.contains("image")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().unwrap();
        let repo = YamlRecordRepository::in_project(dir.path());
        let record = record();

        repo.save(&record).unwrap();

        assert_eq!(repo.load().unwrap(), record);
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from(RECORD_FILE)]);
    }

    #[test]
    fn save_overwrites_existing_record() {
        let dir = tempdir().unwrap();
        let repo = YamlRecordRepository::in_project(dir.path());
        fs::write(repo.path(), "old content").unwrap();

        repo.save(&record()).unwrap();

        assert_eq!(repo.load().unwrap().name.as_str(), "shop");
    }

    #[test]
    fn saved_record_uses_camel_case_keys() {
        let dir = tempdir().unwrap();
        let repo = YamlRecordRepository::in_project(dir.path());

        repo.save(&record()).unwrap();

        let content = fs::read_to_string(repo.path()).unwrap();
        assert!(content.contains("lastDeployedAt:"));
        assert!(content.contains("previewEnvironments:"));
        assert!(content.contains("abc123:"));
        assert!(content.contains("file: .env"));
    }

    #[cfg(unix)]
    #[test]
    fn saved_record_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let repo = YamlRecordRepository::in_project(dir.path());
        repo.save(&record()).unwrap();

        let mode = fs::metadata(repo.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
