//! Property tests for the scalar codecs and the identifier scheme

use proptest::prelude::*;
use stix2_core::{Binary, Identifier, ObjectType, Timestamp};

proptest! {
    #[test]
    fn binary_roundtrips_all_byte_sequences(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let bin = Binary::new(bytes.clone());
        let decoded = Binary::decode(&bin.encode()).unwrap();
        prop_assert_eq!(decoded.as_bytes(), bytes.as_slice());
    }

    #[test]
    fn derived_identifiers_are_stable(canonical in ".{0,64}") {
        let a = Identifier::new_derived(ObjectType::DomainName, &canonical);
        let b = Identifier::new_derived(ObjectType::DomainName, &canonical);
        prop_assert_eq!(&a, &b);
        prop_assert!(a.is_valid_for(ObjectType::DomainName));
    }

    #[test]
    fn derived_identifiers_differ_across_values(a in "[a-z]{1,32}", b in "[a-z]{1,32}") {
        prop_assume!(a != b);
        let ida = Identifier::new_derived(ObjectType::Url, &a);
        let idb = Identifier::new_derived(ObjectType::Url, &b);
        prop_assert_ne!(ida, idb);
    }

    #[test]
    fn identifier_validation_never_panics(text in ".{0,128}") {
        let id = Identifier::from_raw(text);
        let _ = id.is_valid();
        let _ = id.is_valid_for(ObjectType::Malware);
        let _ = id.object_type();
    }

    #[test]
    fn timestamp_roundtrip_truncates_to_millis(secs in 0i64..4_102_444_800, nanos in 0u32..1_000_000_000) {
        let datetime = chrono::DateTime::from_timestamp(secs, nanos).unwrap().fixed_offset();
        let ts = Timestamp::from_datetime(datetime);
        let reparsed = Timestamp::parse(&ts.to_string()).unwrap();
        prop_assert_eq!(reparsed, ts.truncated_to_millis());
    }
}

#[test]
fn random_identifiers_have_valid_uuid_suffix_for_every_type() {
    for object_type in ObjectType::all() {
        let id = Identifier::new_random(*object_type);
        let suffix = id.as_str().split("--").nth(1).expect("suffix");
        assert!(uuid::Uuid::parse_str(suffix).is_ok(), "{id}");
        assert!(id.as_str().starts_with(object_type.as_str()));
    }
}
