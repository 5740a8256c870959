//! Property suites over the selection model's wire forms.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use vantage_core::Value;

    use crate::filter::{FilterNode, PredicateOp};
    use crate::selected::SelectedItems;
    use crate::sort::SortKey;

    fn arb_field() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-z_]{1,12}",
            "[a-z_]{1,12}".prop_map(|name| format!("data.{name}")),
        ]
    }

    fn arb_op() -> impl Strategy<Value = PredicateOp> {
        prop_oneof![
            Just(PredicateOp::Equal),
            Just(PredicateOp::NotEqual),
            Just(PredicateOp::Less),
            Just(PredicateOp::Greater),
            Just(PredicateOp::Contains),
            Just(PredicateOp::Empty),
        ]
    }

    fn arb_leaf_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<i64>().prop_map(Value::Int64),
            "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String),
        ]
    }

    /// Recursive filter trees up to depth 3.
    fn arb_filter() -> impl Strategy<Value = FilterNode> {
        let leaf = (arb_field(), arb_op(), arb_leaf_value())
            .prop_map(|(field, op, value)| FilterNode::predicate(field, op, value));
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(FilterNode::and),
                prop::collection::vec(inner, 0..4).prop_map(FilterNode::or),
            ]
        })
    }

    fn arb_selected() -> impl Strategy<Value = SelectedItems> {
        prop_oneof![
            prop::collection::vec(1u64..1000, 0..10)
                .prop_map(|excluded| SelectedItems::All { excluded }),
            prop::collection::vec(1u64..1000, 0..10)
                .prop_map(|included| SelectedItems::Explicit { included }),
        ]
    }

    proptest! {
        /// Filter trees roundtrip through their untagged JSON form.
        #[test]
        fn filter_serde_roundtrip(tree in arb_filter()) {
            let json = serde_json::to_string(&tree).unwrap();
            let back: FilterNode = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(tree, back);
        }

        /// The overlay roundtrips through its wire mapping.
        #[test]
        fn selected_items_serde_roundtrip(selected in arb_selected()) {
            let json = serde_json::to_value(&selected).unwrap();
            prop_assert!(json.is_object());
            let back: SelectedItems = serde_json::from_value(json).unwrap();
            prop_assert_eq!(selected, back);
        }

        /// Sort keys roundtrip through the signed parameter form.
        #[test]
        fn sort_key_param_roundtrip(field in "[a-z_]{1,12}", ascending in any::<bool>()) {
            let key = if ascending {
                SortKey::asc(field.as_str())
            } else {
                SortKey::desc(field.as_str())
            };
            prop_assert_eq!(SortKey::parse(&key.to_param()).unwrap(), key);
        }
    }
}
