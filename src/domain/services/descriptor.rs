//! Compose descriptor builder
//!
//! Turns a resolved route and its environment assignments into the compose
//! document uploaded to the host. Building is pure; rendering only
//! serializes.

use std::collections::BTreeMap;

use thiserror::Error;

use super::routing::{Route, RoutingSettings};
use crate::domain::entities::{ComposeDocument, NetworkDescriptor, ServiceDescriptor};

#[derive(Error, Debug)]
#[error("could not serialize compose file: {0}")]
pub struct DescriptorError(#[from] serde_yaml_ng::Error);

/// Build a single-service compose document attached to the shared network
pub fn build_descriptor(
    route: &Route,
    settings: &RoutingSettings,
    environment: Vec<String>,
) -> ComposeDocument {
    let service = ServiceDescriptor {
        image: route.image.clone(),
        labels: route.labels(settings),
        environment,
        networks: vec![settings.network.clone()],
    };

    let mut services = BTreeMap::new();
    services.insert(route.service_name.clone(), service);

    let mut networks = BTreeMap::new();
    networks.insert(settings.network.clone(), NetworkDescriptor { external: true });

    ComposeDocument { services, networks }
}

pub fn render(document: &ComposeDocument) -> Result<String, DescriptorError> {
    Ok(serde_yaml_ng::to_string(document)?)
}
