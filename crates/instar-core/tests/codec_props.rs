// Rust guideline compliant 2026-02-06

//! Property-based tests for the codec module.
//!
//! These tests validate round-trip and format properties of instance and
//! service identifiers.

use instar_core::codec::{
    decode_instance_id, encode_instance_id, encode_service_id, resolve_instance, resolve_service,
};
use instar_core::Error;
use proptest::prelude::*;

/// Generates service identifiers without the instance separator.
fn arb_service_id() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9=.+/-]{1,40}").unwrap()
}

/// Generates arbitrary instance names, including non-ASCII text.
fn arb_name() -> impl Strategy<Value = String> {
    any::<String>()
}

proptest! {
    /// Decoding an encoded instance id yields the original name.
    #[test]
    fn test_instance_round_trip(service_id in arb_service_id(), name in arb_name()) {
        let id = encode_instance_id(&service_id, &name);
        prop_assert_eq!(decode_instance_id(&id).unwrap(), name);
    }

    /// Resolving a name and then the produced id gives back the same pair.
    #[test]
    fn test_resolve_instance_round_trip(
        service_id in arb_service_id(),
        name in "[^,]{1,60}"
    ) {
        let from_name = resolve_instance(&service_id, &name, "", "instance-name").unwrap();
        let from_id = resolve_instance("", "", &from_name.id, "instance-name").unwrap();
        prop_assert_eq!(from_id, from_name);
    }

    /// Every encoded id splits into the service id and one more part.
    #[test]
    fn test_instance_id_format(service_id in arb_service_id(), name in arb_name()) {
        let id = encode_instance_id(&service_id, &name);
        let parts: Vec<&str> = id.split('_').collect();
        prop_assert_eq!(parts.len(), 2);
        prop_assert_eq!(parts[0], service_id.as_str());
    }

    /// Service ids round-trip both the name and the layer.
    #[test]
    fn test_service_round_trip(name in arb_name(), normal in any::<bool>()) {
        let id = encode_service_id(&name, normal);
        let pair = resolve_service("", &id, !normal).unwrap();
        prop_assert_eq!(pair.name, name);
        prop_assert_eq!(pair.normal, normal);
    }

    /// A name without a service id never resolves.
    #[test]
    fn test_name_requires_service(name in "[a-z]{1,20}") {
        let result = resolve_instance("", &name, "", "instance-name");
        let is_missing_dependency = matches!(result, Err(Error::MissingDependency { .. }));
        prop_assert!(is_missing_dependency);
    }
}
