//! Secret preparation
//!
//! Encrypts the env file for the host and derives the compose environment
//! from its keys. Values never leave the encrypted file: each key is written
//! as `KEY=${KEY}` and filled in by `sops exec-env` at activation.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::ports::{SecretEncryptor, SecretError};
use crate::domain::services::ENCRYPTED_ENV_FILE;
use crate::domain::value_objects::ContentHash;

use super::staging::Staging;

/// Encrypted env file ready for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSecrets {
    /// Staged `encrypted.env`
    pub artifact: PathBuf,
    /// Compose environment entries
    pub environment: Vec<String>,
    /// Checksum of the plaintext
    pub checksum: ContentHash,
}

/// Keys defined in a dotenv file, in first-seen order
///
/// Blank lines and `#` comments are skipped and an `export ` prefix is
/// accepted.
pub fn parse_env_keys(content: &str) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, _)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            continue;
        }
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    }
    keys
}

/// Read, checksum and encrypt `env_file` into the staging directory
pub fn prepare_secrets(
    env_file: &Path,
    staging: &Staging,
    encryptor: &dyn SecretEncryptor,
) -> Result<PreparedSecrets, SecretError> {
    let plaintext = fs::read(env_file).map_err(|source| SecretError::Read {
        path: env_file.to_path_buf(),
        source,
    })?;
    let checksum = ContentHash::from_bytes(&plaintext);
    let environment = parse_env_keys(&String::from_utf8_lossy(&plaintext))
        .into_iter()
        .map(|key| format!("{key}=${{{key}}}"))
        .collect();

    let artifact = staging.reserve(ENCRYPTED_ENV_FILE);
    encryptor.encrypt(env_file, &artifact)?;

    Ok(PreparedSecrets {
        artifact,
        environment,
        checksum,
    })
}

/// Compare the new checksum with the recorded one
///
/// Only reported; a changed env file never blocks a deploy.
pub fn changed_since(previous: Option<&ContentHash>, current: &ContentHash) -> Option<bool> {
    let previous = previous?;
    let changed = previous != current;
    info!(
        previous = %previous,
        current = %current,
        changed,
        "Compared env file checksum"
    );
    Some(changed)
}
