//! Configuration module for Sidekick
//!
//! Global settings live in `~/.config/sidekick/sidekick.yml`. Resolution order:
//! 1. Environment variables (SIDEKICK_*)
//! 2. Settings file
//! 3. Built-in defaults
//!
//! Commands load the settings once and pass them down explicitly.

mod loader;
mod types;

use std::path::PathBuf;

use thiserror::Error;

pub use loader::{
    apply_overrides, default_path, load, load_with_warnings, save, with_env_overrides,
    ConfigWarning,
};
pub use types::ServerConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// No settings file yet
    #[error("no sidekick config at {path} - run `sidekick init` first")]
    NotInitialized { path: PathBuf },

    /// Settings file exists but is not valid YAML for `ServerConfig`
    #[error("sidekick config {path} is invalid: {message}")]
    Corrupted { path: PathBuf, message: String },

    #[error("`{field}` is not set in the sidekick config - run `sidekick init`")]
    MissingField { field: &'static str },

    /// Neither `--config` nor a home directory was available
    #[error("could not determine the home directory for the sidekick config")]
    NoHomeDirectory,

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
