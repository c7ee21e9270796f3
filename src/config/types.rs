//! Configuration type definitions

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::domain::services::RoutingSettings;
use crate::domain::value_objects::DeploymentTarget;

/// Global settings shared by every app deployed from this machine
///
/// Stored as YAML with camelCase keys, e.g.:
///
/// ```yaml
/// serverAddress: 203.0.113.7
/// dockerUsername: alice
/// publicDomain: example.com
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// Host name or IP of the VPS
    #[serde(default)]
    pub server_address: String,

    #[serde(default = "default_remote_user")]
    pub remote_user: String,

    /// Registry namespace primary images are pushed to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_username: Option<String>,

    /// Domain apps are published under; falls back to the server address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_domain: Option<String>,

    #[serde(default = "default_cert_resolver")]
    pub cert_resolver: String,

    #[serde(default = "default_network")]
    pub network: String,

    /// age recipient env files are encrypted to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_public_key: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_address: String::new(),
            remote_user: default_remote_user(),
            docker_username: None,
            public_domain: None,
            cert_resolver: default_cert_resolver(),
            network: default_network(),
            age_public_key: None,
        }
    }
}

fn default_remote_user() -> String {
    "sidekick".to_string()
}

fn default_cert_resolver() -> String {
    "default".to_string()
}

fn default_network() -> String {
    "sidekick".to_string()
}

impl ServerConfig {
    pub fn new(server_address: impl Into<String>) -> Self {
        Self {
            server_address: server_address.into(),
            ..Self::default()
        }
    }

    /// Check the fields every command needs
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server_address.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "serverAddress",
            });
        }
        if self.remote_user.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "remoteUser",
            });
        }
        Ok(())
    }

    pub fn target(&self) -> DeploymentTarget {
        DeploymentTarget::new(&self.server_address, &self.remote_user)
    }

    pub fn routing_settings(&self) -> RoutingSettings {
        RoutingSettings {
            cert_resolver: self.cert_resolver.clone(),
            network: self.network.clone(),
        }
    }

    /// Domain default app hostnames hang off
    pub fn base_domain(&self) -> &str {
        match self.public_domain.as_deref().map(str::trim) {
            Some(domain) if !domain.is_empty() => domain,
            _ => &self.server_address,
        }
    }

    /// Registry namespace, required for primary deployments
    pub fn require_docker_username(&self) -> Result<&str, ConfigError> {
        self.docker_username
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::MissingField {
                field: "dockerUsername",
            })
    }

    /// Encryption recipient, required when an env file is deployed
    pub fn require_age_public_key(&self) -> Result<&str, ConfigError> {
        self.age_public_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingField {
                field: "agePublicKey",
            })
    }
}
