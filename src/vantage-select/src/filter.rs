//! Recursive filter AST.
//!
//! Filters arrive as collaborator input and are passed through to the
//! record store unchanged; modeling them as a typed tree lets the query
//! executor validate field references before touching the store.

use serde::{Deserialize, Serialize};

use vantage_core::Value;

/// Boolean combinator for filter groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conjunction {
    /// All items must match.
    And,
    /// At least one item must match.
    Or,
}

/// Comparison operator of a leaf predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateOp {
    /// Field equals value.
    Equal,
    /// Field differs from value.
    NotEqual,
    /// Field is strictly less than value.
    Less,
    /// Field is less than or equal to value.
    LessOrEqual,
    /// Field is strictly greater than value.
    Greater,
    /// Field is greater than or equal to value.
    GreaterOrEqual,
    /// String or list field contains the value.
    Contains,
    /// String or list field does not contain the value.
    NotContains,
    /// Field is a member of the value list.
    In,
    /// Field is not a member of the value list.
    NotIn,
    /// Field is null, an empty string, or an empty list.
    Empty,
    /// Field is none of null, empty string, empty list.
    NotEmpty,
}

/// A node of the filter tree: either a boolean group or a leaf
/// predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterNode {
    /// Boolean combination of child nodes.
    Group {
        /// How the children combine.
        conjunction: Conjunction,
        /// Child nodes.
        items: Vec<FilterNode>,
    },
    /// Leaf field/operator/value predicate.
    Predicate {
        /// Field reference, e.g. `id` or `data.image`.
        field: String,
        /// Comparison operator.
        #[serde(rename = "operator")]
        op: PredicateOp,
        /// Comparison value. Defaults to null for `empty`/`not_empty`.
        #[serde(default)]
        value: Value,
    },
}

impl FilterNode {
    /// Create an AND group.
    pub fn and(items: Vec<FilterNode>) -> Self {
        Self::Group {
            conjunction: Conjunction::And,
            items,
        }
    }

    /// Create an OR group.
    pub fn or(items: Vec<FilterNode>) -> Self {
        Self::Group {
            conjunction: Conjunction::Or,
            items,
        }
    }

    /// Create a leaf predicate.
    pub fn predicate(
        field: impl Into<String>,
        op: PredicateOp,
        value: impl Into<Value>,
    ) -> Self {
        Self::Predicate {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Collect every field referenced anywhere in the tree.
    pub fn referenced_fields(&self) -> Vec<&str> {
        let mut fields = Vec::new();
        self.collect_fields(&mut fields);
        fields
    }

    fn collect_fields<'a>(&'a self, fields: &mut Vec<&'a str>) {
        match self {
            Self::Group { items, .. } => {
                for item in items {
                    item.collect_fields(fields);
                }
            }
            Self::Predicate { field, .. } => fields.push(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referenced_fields_walks_nested_groups() {
        let tree = FilterNode::and(vec![
            FilterNode::predicate("id", PredicateOp::Greater, 10i64),
            FilterNode::or(vec![
                FilterNode::predicate("data.caption", PredicateOp::Contains, "cat"),
                FilterNode::predicate("total_annotations", PredicateOp::Equal, 0i64),
            ]),
        ]);

        assert_eq!(
            tree.referenced_fields(),
            vec!["id", "data.caption", "total_annotations"]
        );
    }

    #[test]
    fn test_filter_json_shape() {
        let json = r#"{
            "conjunction": "and",
            "items": [
                {"field": "id", "operator": "greater_or_equal", "value": 5},
                {"field": "data.caption", "operator": "not_empty"}
            ]
        }"#;

        let tree: FilterNode = serde_json::from_str(json).unwrap();
        let FilterNode::Group { conjunction, items } = &tree else {
            panic!("expected group")
        };
        assert_eq!(*conjunction, Conjunction::And);
        assert_eq!(items.len(), 2);
        assert!(matches!(
            &items[1],
            FilterNode::Predicate {
                op: PredicateOp::NotEmpty,
                value: Value::Null,
                ..
            }
        ));
    }

    #[test]
    fn test_filter_roundtrip() {
        let tree = FilterNode::or(vec![
            FilterNode::predicate("annotators", PredicateOp::In, vec![1i64, 2]),
            FilterNode::predicate("file_upload", PredicateOp::Empty, Value::Null),
        ]);

        let json = serde_json::to_string(&tree).unwrap();
        let back: FilterNode = serde_json::from_str(&json).unwrap();
        assert_eq!(tree, back);
    }
}
