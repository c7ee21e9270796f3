//! Transfer method selection

use std::process::{Command, Output, Stdio};

use crate::domain::ports::{FileTransfer, TransferError};

use super::rsync::RsyncTransfer;
use super::scp::ScpTransfer;

/// Pick the best copy tool installed on this machine
///
/// rsync is preferred; scp ships with every OpenSSH client so it is the
/// fallback.
pub fn detect_transfer() -> Result<Box<dyn FileTransfer>, TransferError> {
    if RsyncTransfer::check_available() {
        return Ok(Box::new(RsyncTransfer));
    }
    if ScpTransfer::check_available() {
        return Ok(Box::new(ScpTransfer));
    }
    Err(TransferError::NotAvailable(
        "neither rsync nor scp was found on PATH".to_string(),
    ))
}

/// Run a copy command, capturing its output
pub(super) fn run_copy(mut cmd: Command) -> std::io::Result<Output> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
}

/// `ssh` invocation with the shared session options, for `rsync -e`
pub(super) fn ssh_command_line() -> String {
    let mut parts = vec!["ssh".to_string()];
    parts.extend(super::ssh::ssh_options());
    parts.join(" ")
}
