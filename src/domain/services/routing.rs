//! Naming and routing resolution
//!
//! Pure derivation of service names, image references, hostnames and
//! reverse-proxy labels. Nothing here checks uniqueness; the record's
//! preview map is keyed by revision and that is what keeps previews apart.

use crate::domain::value_objects::{AppName, ContainerPort, RevisionHash};

/// Proxy settings shared by every route on a host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingSettings {
    /// Traefik certificate resolver name
    pub cert_resolver: String,
    /// Shared network the proxy and every app container join
    pub network: String,
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            cert_resolver: "default".to_string(),
            network: "sidekick".to_string(),
        }
    }
}

/// Fully resolved routing for one deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub service_name: String,
    pub image: String,
    pub hostname: String,
    pub port: ContainerPort,
}

impl Route {
    /// Route for the app's primary deployment, pulled from `<registry_user>/<name>`
    pub fn primary(
        name: &AppName,
        registry_user: &str,
        hostname: impl Into<String>,
        port: ContainerPort,
    ) -> Self {
        Self {
            service_name: name.to_string(),
            image: format!("{}/{}", registry_user, name),
            hostname: hostname.into(),
            port,
        }
    }

    /// Route for a preview of `revision`, nested under the app's public host
    pub fn preview(
        name: &AppName,
        revision: &RevisionHash,
        app_host: &str,
        port: ContainerPort,
    ) -> Self {
        Self {
            service_name: format!("{}-{}", name, revision),
            image: format!("{}:{}", name, revision),
            hostname: format!("{}.{}", revision, app_host),
            port,
        }
    }

    /// The six proxy labels, in the order Traefik documents them
    pub fn labels(&self, settings: &RoutingSettings) -> Vec<String> {
        let svc = &self.service_name;
        vec![
            "traefik.enable=true".to_string(),
            format!("traefik.http.routers.{}.rule=Host(`{}`)", svc, self.hostname),
            format!(
                "traefik.http.services.{}.loadbalancer.server.port={}",
                svc, self.port
            ),
            format!("traefik.http.routers.{}.tls=true", svc),
            format!(
                "traefik.http.routers.{}.tls.certresolver={}",
                svc, settings.cert_resolver
            ),
            format!("traefik.docker.network={}", settings.network),
        ]
    }

    pub fn public_url(&self) -> String {
        format!("https://{}", self.hostname)
    }
}

/// Default public hostname for an app: `<name>.<base_domain>`
pub fn default_hostname(name: &AppName, base_domain: &str) -> String {
    format!("{}.{}", name, base_domain.trim_matches('.'))
}
