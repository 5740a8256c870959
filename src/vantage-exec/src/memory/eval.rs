//! Predicate evaluation and sort comparison over single records.

use std::cmp::Ordering;

use common_error::{VantageError, VantageResult};
use vantage_core::{Record, Value};
use vantage_select::{Conjunction, FilterNode, PredicateOp, SortKey};

/// Evaluate a filter tree against one record.
///
/// Empty groups follow their conjunction's identity: an empty AND
/// matches, an empty OR does not.
pub(crate) fn matches(record: &Record, node: &FilterNode) -> VantageResult<bool> {
    match node {
        FilterNode::Group { conjunction, items } => match conjunction {
            Conjunction::And => {
                for item in items {
                    if !matches(record, item)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Conjunction::Or => {
                for item in items {
                    if matches(record, item)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        },
        FilterNode::Predicate { field, op, value } => {
            let actual = record
                .field_value(field)
                .ok_or_else(|| VantageError::query(format!("unknown filter field: {field:?}")))?;
            evaluate(&actual, *op, value)
        }
    }
}

fn evaluate(actual: &Value, op: PredicateOp, operand: &Value) -> VantageResult<bool> {
    Ok(match op {
        PredicateOp::Equal => actual.semantic_eq(operand),
        PredicateOp::NotEqual => !actual.semantic_eq(operand),
        PredicateOp::Less => compare(actual, operand, |o| o == Ordering::Less),
        PredicateOp::LessOrEqual => compare(actual, operand, |o| o != Ordering::Greater),
        PredicateOp::Greater => compare(actual, operand, |o| o == Ordering::Greater),
        PredicateOp::GreaterOrEqual => compare(actual, operand, |o| o != Ordering::Less),
        PredicateOp::Contains => contains(actual, operand)?,
        PredicateOp::NotContains => !contains(actual, operand)?,
        PredicateOp::In => member_of(actual, operand)?,
        PredicateOp::NotIn => !member_of(actual, operand)?,
        PredicateOp::Empty => actual.is_empty_value(),
        PredicateOp::NotEmpty => !actual.is_empty_value(),
    })
}

/// Ordered comparisons are false when the two values are incomparable
/// (null on either side, or mismatched types).
fn compare(actual: &Value, operand: &Value, pick: impl Fn(Ordering) -> bool) -> bool {
    actual.partial_cmp_values(operand).is_some_and(pick)
}

fn contains(actual: &Value, operand: &Value) -> VantageResult<bool> {
    match actual {
        Value::String(haystack) => {
            let needle = operand.as_str().ok_or_else(|| {
                VantageError::query(format!(
                    "contains over a string field takes a string value, got {}",
                    operand.type_name()
                ))
            })?;
            Ok(haystack.contains(needle))
        }
        Value::List(items) => Ok(items.iter().any(|item| item.semantic_eq(operand))),
        Value::Null => Ok(false),
        other => Err(VantageError::query(format!(
            "contains is not defined for {} fields",
            other.type_name()
        ))),
    }
}

fn member_of(actual: &Value, operand: &Value) -> VantageResult<bool> {
    let Value::List(candidates) = operand else {
        return Err(VantageError::query(format!(
            "in/not_in takes a list value, got {}",
            operand.type_name()
        )));
    };
    Ok(candidates
        .iter()
        .any(|candidate| actual.semantic_eq(candidate)))
}

/// Compare two records on one sort key. Nulls and unresolvable fields
/// sort before everything ascending, after everything descending.
pub(crate) fn compare_by_key(a: &Record, b: &Record, key: &SortKey) -> Ordering {
    let left = a.field_value(&key.field).unwrap_or(Value::Null);
    let right = b.field_value(&key.field).unwrap_or(Value::Null);

    let ordering = match (left.is_null(), right.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => left.partial_cmp_values(&right).unwrap_or(Ordering::Equal),
    };
    if key.ascending {
        ordering
    } else {
        ordering.reverse()
    }
}
