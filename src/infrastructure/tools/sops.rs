//! SOPS secret encryptor
//!
//! Encrypts a dotenv file for an age recipient with the local `sops` binary.
//! The host decrypts it with `sops exec-env` when the stack starts.

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::{SecretEncryptor, SecretError};

/// Secret encryptor backed by `sops` with an age recipient
#[derive(Debug, Clone)]
pub struct SopsEncryptor {
    program: String,
    age_recipient: String,
}

impl SopsEncryptor {
    pub fn new(age_recipient: impl Into<String>) -> Self {
        Self {
            program: "sops".to_string(),
            age_recipient: age_recipient.into(),
        }
    }

    fn command(&self, plaintext: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--encrypt")
            .arg("--age")
            .arg(&self.age_recipient)
            .arg("--input-type")
            .arg("dotenv")
            .arg("--output-type")
            .arg("dotenv")
            .arg(plaintext);
        cmd
    }
}

impl SecretEncryptor for SopsEncryptor {
    fn encrypt(&self, plaintext: &Path, output: &Path) -> Result<(), SecretError> {
        if self.age_recipient.trim().is_empty() {
            return Err(SecretError::MissingKey);
        }
        debug!(file = %plaintext.display(), "Encrypting env file");

        let result = self
            .command(plaintext)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => SecretError::ToolMissing(self.program.clone()),
                _ => SecretError::EncryptionFailed {
                    path: plaintext.to_path_buf(),
                    stderr: e.to_string(),
                },
            })?;

        if !result.status.success() {
            return Err(SecretError::EncryptionFailed {
                path: plaintext.to_path_buf(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        fs::write(output, &result.stdout).map_err(|e| SecretError::EncryptionFailed {
            path: output.to_path_buf(),
            stderr: e.to_string(),
        })
    }
}
