//! Deployment record entity
//!
//! The only state Sidekick trusts between runs. It is a plain data structure;
//! reading and writing `sidekick.yml` is handled by `RecordRepository`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AppName, ContainerPort, ContentHash, RevisionHash, Timestamp};

/// Env file used for secrets, and the checksum of its last deployed contents
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnvSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<ContentHash>,
}

impl EnvSettings {
    pub fn is_empty(&self) -> bool {
        self.file.is_none() && self.hash.is_none()
    }
}

/// A deployed preview of one revision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewEnvironment {
    pub url: String,
    pub image: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub name: AppName,
    pub image: String,
    pub port: ContainerPort,
    /// Public hostname of the primary deployment (no scheme)
    pub url: String,
    pub created_at: Timestamp,
    pub last_deployed_at: Timestamp,
    #[serde(default, skip_serializing_if = "EnvSettings::is_empty")]
    pub env: EnvSettings,
    /// Keyed by short revision hash
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub preview_environments: BTreeMap<String, PreviewEnvironment>,
}

impl DeploymentRecord {
    /// Record for an app's first deployment
    pub fn launched(
        name: AppName,
        image: impl Into<String>,
        port: ContainerPort,
        url: impl Into<String>,
        env: EnvSettings,
        now: Timestamp,
    ) -> Self {
        Self {
            name,
            image: image.into(),
            port,
            url: url.into(),
            created_at: now.clone(),
            last_deployed_at: now,
            env,
            preview_environments: BTreeMap::new(),
        }
    }

    /// Update after a redeploy of the primary app
    ///
    /// `createdAt` and the preview map are left untouched.
    pub fn record_primary_deploy(
        &mut self,
        image: impl Into<String>,
        port: ContainerPort,
        url: impl Into<String>,
        env_hash: Option<ContentHash>,
        now: Timestamp,
    ) {
        self.image = image.into();
        self.port = port;
        self.url = url.into();
        self.env.hash = env_hash;
        self.last_deployed_at = now;
    }

    /// Insert or refresh a preview entry, keeping every other preview
    ///
    /// Redeploying a revision that is already recorded keeps its original
    /// `createdAt`.
    pub fn record_preview(&mut self, revision: &RevisionHash, mut entry: PreviewEnvironment) {
        if let Some(existing) = self.preview_environments.get(revision.as_str()) {
            entry.created_at = existing.created_at.clone();
        }
        self.preview_environments
            .insert(revision.as_str().to_string(), entry);
    }

    pub fn preview(&self, revision: &str) -> Option<&PreviewEnvironment> {
        self.preview_environments.get(revision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DeploymentRecord {
        DeploymentRecord::launched(
            AppName::parse("shop").unwrap(),
            "alice/shop",
            ContainerPort::parse("3000").unwrap(),
            "shop.example.com",
            EnvSettings::default(),
            Timestamp::from_datetime(chrono::DateTime::UNIX_EPOCH),
        )
    }

    fn preview_entry(rev: &str, created: &str) -> PreviewEnvironment {
        PreviewEnvironment {
            url: format!("https://{}.shop.example.com", rev),
            image: format!("shop:{}", rev),
            created_at: serde_yaml_ng::from_str(&format!("'{}'", created)).unwrap(),
        }
    }

    #[test]
    fn launched_sets_both_timestamps() {
        let rec = record();
        assert_eq!(rec.created_at, rec.last_deployed_at);
        assert!(rec.preview_environments.is_empty());
    }

    #[test]
    fn new_preview_keeps_existing_previews() {
        let mut rec = record();
        let abc = RevisionHash::parse("abc123").unwrap();
        let def = RevisionHash::parse("def456").unwrap();

        rec.record_preview(&abc, preview_entry("abc123", "first"));
        rec.record_preview(&def, preview_entry("def456", "second"));

        assert_eq!(rec.preview_environments.len(), 2);
        assert_eq!(rec.preview("abc123").unwrap().image, "shop:abc123");
        assert_eq!(rec.preview("def456").unwrap().image, "shop:def456");
    }

    #[test]
    fn redeployed_preview_keeps_created_at() {
        let mut rec = record();
        let abc = RevisionHash::parse("abc123").unwrap();

        rec.record_preview(&abc, preview_entry("abc123", "first"));
        rec.record_preview(&abc, preview_entry("abc123", "second"));

        assert_eq!(rec.preview("abc123").unwrap().created_at.as_str(), "first");
    }

    #[test]
    fn primary_redeploy_keeps_created_at_and_previews() {
        let mut rec = record();
        let created = rec.created_at.clone();
        let abc = RevisionHash::parse("abc123").unwrap();
        rec.record_preview(&abc, preview_entry("abc123", "first"));

        rec.record_primary_deploy(
            "alice/shop",
            ContainerPort::parse("8080").unwrap(),
            "shop.example.com",
            Some(ContentHash::from_bytes(b"A=1")),
            Timestamp::now(),
        );

        assert_eq!(rec.created_at, created);
        assert_eq!(rec.port.as_str(), "8080");
        assert!(rec.env.hash.is_some());
        assert!(rec.preview("abc123").is_some());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut rec = record();
        rec.record_preview(
            &RevisionHash::parse("abc123").unwrap(),
            preview_entry("abc123", "first"),
        );
        let yaml = serde_yaml_ng::to_string(&rec).unwrap();
        assert!(yaml.contains("createdAt:"));
        assert!(yaml.contains("lastDeployedAt:"));
        assert!(yaml.contains("previewEnvironments:"));
        assert!(!yaml.contains("env:"));
    }
}
