//! Compose document entity
//!
//! Only the subset of the compose schema Sidekick writes. Maps are ordered so
//! that rendering the same document twice yields identical bytes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One deployable service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub image: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environment: Vec<String>,
    #[serde(default)]
    pub networks: Vec<String>,
}

/// Network declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDescriptor {
    /// Must already exist on the remote host; compose will not create it
    pub external: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComposeDocument {
    pub services: BTreeMap<String, ServiceDescriptor>,
    pub networks: BTreeMap<String, NetworkDescriptor>,
}

impl ComposeDocument {
    pub fn service(&self, name: &str) -> Option<&ServiceDescriptor> {
        self.services.get(name)
    }

    pub fn external_networks(&self) -> impl Iterator<Item = &str> {
        self.networks
            .iter()
            .filter(|(_, n)| n.external)
            .map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_environment_is_omitted() {
        let service = ServiceDescriptor {
            image: "alice/shop".to_string(),
            labels: vec![],
            environment: vec![],
            networks: vec!["sidekick".to_string()],
        };
        let yaml = serde_yaml_ng::to_string(&service).unwrap();
        assert!(!yaml.contains("environment"));
    }

    #[test]
    fn external_networks_filters_internal_ones() {
        let mut doc = ComposeDocument::default();
        doc.networks
            .insert("sidekick".into(), NetworkDescriptor { external: true });
        doc.networks
            .insert("internal".into(), NetworkDescriptor { external: false });
        assert_eq!(doc.external_networks().collect::<Vec<_>>(), vec!["sidekick"]);
    }
}
