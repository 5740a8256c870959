//! Property-based testing utilities for vantage-core.
//!
//! Provides proptest strategies for core types and property suites over
//! value semantics and serialization.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::record::Record;
    use crate::types::Value;

    /// Strategy for simple (non-recursive) values that roundtrip through
    /// JSON. Floats come from integers to avoid precision issues.
    fn arb_simple_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int64),
            any::<i32>().prop_map(|i| Value::Float64(f64::from(i))),
            "[a-zA-Z0-9]{0,50}".prop_map(Value::String),
        ]
    }

    /// Strategy for values including lists of simple values.
    fn arb_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            arb_simple_value(),
            prop::collection::vec(arb_simple_value(), 0..8).prop_map(Value::List),
        ]
    }

    /// Strategy for records with arbitrary data fields.
    fn arb_record() -> impl Strategy<Value = Record> {
        (
            1u64..10_000,
            1u64..100,
            prop::collection::hash_map("[a-z]{1,10}", arb_simple_value(), 0..5),
        )
            .prop_map(|(id, collection, data)| {
                let mut record = Record::new(id, collection);
                record.data = data;
                record
            })
    }

    proptest! {
        /// Value serialization roundtrips through untagged JSON.
        #[test]
        fn value_serde_roundtrip(value in arb_value()) {
            let serialized = serde_json::to_string(&value).unwrap();
            let deserialized: Value = serde_json::from_str(&serialized).unwrap();
            prop_assert!(value.semantic_eq(&deserialized));
        }

        /// Record serialization roundtrips through JSON.
        #[test]
        fn record_serde_roundtrip(record in arb_record()) {
            let serialized = serde_json::to_string(&record).unwrap();
            let deserialized: Record = serde_json::from_str(&serialized).unwrap();
            prop_assert_eq!(record, deserialized);
        }

        /// semantic_eq is reflexive.
        #[test]
        fn value_semantic_eq_reflexive(value in arb_value()) {
            prop_assert!(value.semantic_eq(&value));
        }

        /// Value ordering is antisymmetric where defined.
        #[test]
        fn value_cmp_antisymmetric(a in arb_simple_value(), b in arb_simple_value()) {
            if let (Some(ab), Some(ba)) =
                (a.partial_cmp_values(&b), b.partial_cmp_values(&a))
            {
                prop_assert_eq!(ab, ba.reverse());
            }
        }

        /// Data-namespace lookups always resolve (missing keys are null).
        #[test]
        fn record_data_lookup_total(record in arb_record(), key in "[a-z]{1,10}") {
            let field = format!("data.{key}");
            prop_assert!(record.field_value(&field).is_some());
        }
    }
}
