//! Command implementations for the sidekick binary

mod common;
pub mod deploy;
pub mod init;
pub mod launch;
pub mod preview;
