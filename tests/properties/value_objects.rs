//! Property tests for user-supplied names and revisions.

use proptest::prelude::*;

use sidekick::{AppName, RevisionHash};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary input never panics.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,128}") {
        let _ = AppName::parse(&s);
        let _ = RevisionHash::parse(&s);
    }

    /// PROPERTY: Accepted app names are a single DNS label.
    #[test]
    fn property_app_name_is_dns_label(s in "(?s).{0,64}") {
        if let Ok(name) = AppName::parse(&s) {
            let name = name.as_str();
            prop_assert!(!name.is_empty());
            prop_assert!(!name.starts_with('-'));
            prop_assert!(name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }

    /// PROPERTY: Names containing a dot or an uppercase letter are rejected.
    #[test]
    fn property_dotted_or_uppercase_names_rejected(s in "[a-z]{0,8}[.A-Z][a-z]{0,8}") {
        prop_assert!(AppName::parse(&s).is_err());
    }

    /// PROPERTY: Lowercase hex revisions up to a full SHA-1 are accepted as-is.
    #[test]
    fn property_hex_revisions_accepted(s in "[0-9a-f]{1,40}") {
        let rev = RevisionHash::parse(&s).unwrap();
        prop_assert_eq!(rev.as_str(), s.as_str());
    }

    /// PROPERTY: Uppercase or non-hex revisions are rejected.
    #[test]
    fn property_non_hex_revisions_rejected(s in "[0-9a-f]{0,8}[G-Zg-z][0-9a-f]{0,8}") {
        prop_assert!(RevisionHash::parse(&s).is_err());
    }
}
