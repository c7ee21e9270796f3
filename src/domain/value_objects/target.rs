//! Deployment target value object - the VPS the pipeline talks to

/// Remote host and login user
///
/// Comes from the global settings file; the pipeline never changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentTarget {
    server_address: String,
    remote_user: String,
}

impl DeploymentTarget {
    pub fn new(server_address: impl Into<String>, remote_user: impl Into<String>) -> Self {
        Self {
            server_address: server_address.into(),
            remote_user: remote_user.into(),
        }
    }

    pub fn server_address(&self) -> &str {
        &self.server_address
    }

    pub fn remote_user(&self) -> &str {
        &self.remote_user
    }

    /// SSH destination (`user@host`)
    pub fn ssh_destination(&self) -> String {
        format!("{}@{}", self.remote_user, self.server_address)
    }

    /// Copy destination for a directory relative to the remote home
    pub fn remote_spec(&self, remote_dir: &str) -> String {
        format!("{}:./{}/", self.ssh_destination(), remote_dir.trim_matches('/'))
    }
}
