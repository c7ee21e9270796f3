//! Property tests for hostname, image and label derivation.

use proptest::prelude::*;

use sidekick::domain::services::{default_hostname, Route, RoutingSettings};
use sidekick::{AppName, ContainerPort, RevisionHash};

fn app_name() -> impl Strategy<Value = AppName> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,20}")
        .unwrap()
        .prop_map(|s| AppName::parse(&s).unwrap())
}

fn revision() -> impl Strategy<Value = RevisionHash> {
    proptest::string::string_regex("[0-9a-f]{4,12}")
        .unwrap()
        .prop_map(|s| RevisionHash::parse(&s).unwrap())
}

fn port() -> impl Strategy<Value = ContainerPort> {
    (1u16..=65535).prop_map(|p| ContainerPort::parse(&p.to_string()).unwrap())
}

fn domain() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,10}\\.(com|dev|io)").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A preview is served one label below the app's host.
    #[test]
    fn property_preview_host_nests_under_app_host(
        name in app_name(),
        rev in revision(),
        base in domain(),
        port in port(),
    ) {
        let app_host = default_hostname(&name, &base);
        let route = Route::preview(&name, &rev, &app_host, port);

        prop_assert_eq!(route.hostname, format!("{}.{}", rev, app_host));
        prop_assert_eq!(route.image, format!("{}:{}", name, rev));
    }

    /// PROPERTY: Preview and primary never share a service name or router.
    #[test]
    fn property_preview_service_differs_from_primary(
        name in app_name(),
        rev in revision(),
        port in port(),
    ) {
        let primary = Route::primary(&name, "alice", "app.example.com", port.clone());
        let preview = Route::preview(&name, &rev, "app.example.com", port);
        let settings = RoutingSettings::default();

        prop_assert_ne!(&primary.service_name, &preview.service_name);
        let primary_labels = primary.labels(&settings);
        for label in preview.labels(&settings) {
            if label.contains(&preview.service_name) {
                prop_assert!(!primary_labels.contains(&label));
            }
        }
    }

    /// PROPERTY: Every route carries the six proxy labels, naming its own router.
    #[test]
    fn property_labels_reference_service(
        name in app_name(),
        port in port(),
        base in domain(),
    ) {
        let host = default_hostname(&name, &base);
        let route = Route::primary(&name, "alice", host.clone(), port.clone());
        let labels = route.labels(&RoutingSettings::default());

        let rule = format!("traefik.http.routers.{}.rule=Host(`{}`)", name, host);
        let server_port = format!("traefik.http.services.{}.loadbalancer.server.port={}", name, port);

        prop_assert_eq!(labels.len(), 6);
        prop_assert!(labels.contains(&rule), "missing {}", rule);
        prop_assert!(labels.contains(&server_port), "missing {}", server_port);
    }

    /// PROPERTY: Default hostnames never contain an empty DNS label.
    #[test]
    fn property_default_hostname_has_no_empty_labels(
        name in app_name(),
        base in domain(),
        leading in 0usize..3,
        trailing in 0usize..3,
    ) {
        let dotted = format!("{}{}{}", ".".repeat(leading), base, ".".repeat(trailing));
        let host = default_hostname(&name, &dotted);

        prop_assert!(!host.contains(".."));
        prop_assert!(!host.ends_with('.'));
        prop_assert_eq!(host, format!("{}.{}", name, base));
    }
}
