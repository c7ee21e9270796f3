//! Property tests for compose descriptor rendering.

use proptest::prelude::*;

use sidekick::domain::services::{build_descriptor, render, Route, RoutingSettings};
use sidekick::{AppName, ComposeDocument, ContainerPort};

fn env_keys() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        proptest::string::string_regex("[A-Z][A-Z0-9_]{0,15}").unwrap(),
        0..6,
    )
}

fn route() -> impl Strategy<Value = Route> {
    (
        proptest::string::string_regex("[a-z][a-z0-9-]{0,15}").unwrap(),
        1u16..=65535,
    )
        .prop_map(|(name, port)| {
            let name = AppName::parse(&name).unwrap();
            let host = format!("{}.example.com", name);
            Route::primary(&name, "alice", host, ContainerPort::parse(&port.to_string()).unwrap())
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rendering is deterministic and yields a document compose can read back.
    #[test]
    fn property_render_is_stable(
        route in route(),
        env in env_keys(),
    ) {
        let settings = RoutingSettings::default();
        let document = build_descriptor(&route, &settings, env.clone());

        let first = render(&document).unwrap();
        let second = render(&build_descriptor(&route, &settings, env)).unwrap();
        prop_assert_eq!(&first, &second);

        let parsed: ComposeDocument = serde_yaml_ng::from_str(&first).unwrap();
        prop_assert_eq!(parsed, document);
    }

    /// PROPERTY: The single service joins the shared external network and nothing else.
    #[test]
    fn property_single_service_on_external_network(
        route in route(),
        network in proptest::string::string_regex("[a-z]{1,12}").unwrap(),
    ) {
        let settings = RoutingSettings {
            cert_resolver: "default".to_string(),
            network: network.clone(),
        };
        let document = build_descriptor(&route, &settings, Vec::new());

        prop_assert_eq!(document.services.len(), 1);
        let service = document.service(&route.service_name).unwrap();
        prop_assert_eq!(&service.networks, &vec![network.clone()]);
        let external: Vec<&str> = document.external_networks().collect();
        prop_assert_eq!(external, vec![network.as_str()]);
    }
}
