//! Content Hash Value Object
//!
//! Checksum of an env file's plaintext, stored in the deployment record so a
//! later deploy can tell whether secrets changed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Content hash value object
///
/// Wraps a SHA-256 hex digest with the `sha256:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix for SHA-256 hashes
    pub const PREFIX: &'static str = "sha256:";

    /// Wrap an existing digest, adding the prefix if missing
    pub fn new(raw_hash: &str) -> Self {
        if raw_hash.starts_with(Self::PREFIX) {
            Self(raw_hash.to_string())
        } else {
            Self(format!("{}{}", Self::PREFIX, raw_hash))
        }
    }

    /// Compute SHA-256 of raw bytes
    pub fn from_bytes(content: &[u8]) -> Self {
        use sha2::{Digest, Sha256};
        let digest = Sha256::digest(content);
        Self(format!("{}{:x}", Self::PREFIX, digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ContentHash {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<ContentHash> for String {
    fn from(hash: ContentHash) -> Self {
        hash.0
    }
}
