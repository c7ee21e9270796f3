//! SecretEncryptor port - encrypts a dotenv file for the remote host

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SecretError {
    #[error("could not read env file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("encrypting {} failed: {stderr}", .path.display())]
    EncryptionFailed { path: PathBuf, stderr: String },

    #[error("{0} is required to deploy secrets")]
    ToolMissing(String),

    #[error("agePublicKey is not set in the sidekick config")]
    MissingKey,
}

pub trait SecretEncryptor {
    /// Encrypt `plaintext` into `output`, replacing `output` if present
    fn encrypt(&self, plaintext: &Path, output: &Path) -> Result<(), SecretError>;
}
