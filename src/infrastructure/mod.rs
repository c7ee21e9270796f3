//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `events/` - Event sinks (NDJSON)
//! - `remote/` - SSH sessions and file transfers (rsync, scp)
//! - `repositories/` - Deployment record store (`sidekick.yml`)
//! - `tools/` - Local tool adapters (docker, sops, git)
//! - `prompt` - Terminal prompter

pub mod events;
pub mod prompt;
pub mod remote;
pub mod repositories;
pub mod tools;

// Re-export for convenience
pub use events::JsonEventSink;
pub use prompt::DialoguerPrompter;
pub use remote::{detect_transfer, RsyncTransfer, ScpTransfer, SshConnector, SshSession};
pub use repositories::{YamlRecordRepository, RECORD_FILE};
pub use tools::{DockerCli, GitCli, SopsEncryptor};
