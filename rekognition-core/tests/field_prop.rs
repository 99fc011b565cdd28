use proptest::prelude::*;
use rekognition_core::field::{slot_eq, slot_hash};
use rekognition_core::{ModelField, Timestamp};
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::Hasher;

fn hash_of<T: ModelField>(slot: &Option<T>) -> u64 {
    let mut hasher = DefaultHasher::new();
    slot_hash(slot, &mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn float_lists_are_reflexive_and_hash_consistently(values in proptest::collection::vec(any::<f32>(), 0..8)) {
        let slot = Some(values.clone());
        let copy = Some(values);
        prop_assert!(slot_eq(&slot, &copy));
        prop_assert_eq!(hash_of(&slot), hash_of(&copy));
    }

    #[test]
    fn absent_never_equals_present(value in ".{0,12}") {
        prop_assert!(!slot_eq(&None, &Some(value.clone())));
        prop_assert!(slot_eq::<String>(&None, &None));
        prop_assert_ne!(hash_of::<String>(&None), hash_of(&Some(value)));
    }

    #[test]
    fn list_merge_appends_in_order(
        first in proptest::collection::vec("[a-z]{1,4}", 0..5),
        second in proptest::collection::vec("[a-z]{1,4}", 0..5),
    ) {
        let mut slot = Some(first.clone());
        Vec::<String>::merge(&mut slot, second.clone());
        let expected: Vec<String> = first.into_iter().chain(second).collect();
        prop_assert_eq!(slot, Some(expected));
    }

    #[test]
    fn scalar_merge_replaces(old in any::<i64>(), new in any::<i64>()) {
        let mut slot = Some(old);
        i64::merge(&mut slot, new);
        prop_assert_eq!(slot, Some(new));
    }

    #[test]
    fn map_merge_extends(
        base in proptest::collection::btree_map("[a-z]{1,3}", any::<i32>(), 0..4),
        extra in proptest::collection::btree_map("[A-Z]{1,3}", any::<i32>(), 0..4),
    ) {
        let mut slot = Some(base.clone());
        BTreeMap::<String, i32>::merge(&mut slot, extra.clone());
        let merged = slot.unwrap_or_default();
        prop_assert_eq!(merged.len(), base.len() + extra.len());
        prop_assert!(extra.iter().all(|(k, v)| merged.get(k) == Some(v)));
    }

    #[test]
    fn timestamp_keeps_milliseconds_through_json(millis in -10_000_000_000_000i64..10_000_000_000_000i64) {
        let ts = Timestamp::from_epoch_millis(millis).unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.epoch_millis(), millis);
        prop_assert_eq!(back, ts);
    }
}
