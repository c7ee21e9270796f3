//! Remote host access
//!
//! SSH sessions for running commands on the VPS and copy tools for moving
//! artifacts there.

mod rsync;
mod scp;
mod ssh;
mod transfer;

pub use rsync::RsyncTransfer;
pub use scp::ScpTransfer;
pub use ssh::{SshConnector, SshSession};
pub use transfer::detect_transfer;
