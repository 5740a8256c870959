//! Column derivation: merged data fields, system columns, data root.

use vantage_core::{DeclaredSchema, UserId, UNDEFINED_FIELD};

use crate::column::{ColumnDescriptor, ColumnType, ValueDomain};
use crate::merge::{merge_fields, FieldOrigin};
use crate::system::{reserved_ids, DATA_ROOT_ID, SYSTEM_COLUMNS};

/// Derive the ordered column descriptor list for a collection.
///
/// Output ordering is deterministic: data columns from the merged field
/// map first, then the fixed system columns, then one synthetic grouping
/// column whose children are the data columns. Pure function of its
/// inputs; never fails.
pub fn derive_columns(
    declared: &DeclaredSchema,
    inferred_fields: &[String],
    member_user_ids: &[UserId],
) -> Vec<ColumnDescriptor> {
    // Force the reserved-id invariant before emitting anything.
    let _ = reserved_ids();

    let merged = merge_fields(declared, inferred_fields);
    let mut columns = Vec::with_capacity(merged.len() + SYSTEM_COLUMNS.len() + 1);
    let mut data_children = Vec::with_capacity(merged.len());

    for field in &merged {
        let column_type = match &field.origin {
            FieldOrigin::Declared(kind) => ColumnType::from_declared(kind),
            FieldOrigin::Inferred => ColumnType::Unknown,
        };
        let title = if field.name == UNDEFINED_FIELD {
            "data"
        } else {
            field.name.as_str()
        };
        let labeling = field.is_declared() || field.name == UNDEFINED_FIELD;

        columns.push(
            ColumnDescriptor::new(&field.name, title, column_type)
                .with_parent(DATA_ROOT_ID)
                .with_visibility(true, labeling),
        );
        data_children.push(field.name.clone());
    }

    for system in SYSTEM_COLUMNS {
        let mut column = ColumnDescriptor::new(system.id, system.title, system.column_type)
            .with_visibility(system.explore, system.labeling);
        if let Some(help) = system.help {
            column = column.with_help(help);
        }
        if system.id == "annotators" {
            column = column.with_value_domain(ValueDomain {
                items: member_user_ids.to_vec(),
            });
        }
        columns.push(column);
    }

    columns.push(
        ColumnDescriptor::new(DATA_ROOT_ID, "Data", ColumnType::List)
            .with_children(data_children),
    );

    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnType;

    fn ids(columns: &[ColumnDescriptor]) -> Vec<&str> {
        columns.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_scenario_declared_image_inferred_caption() {
        let declared = DeclaredSchema::from_pairs([("image", "Image")]);
        let inferred = vec!["image".to_string(), "caption".to_string()];

        let columns = derive_columns(&declared, &inferred, &[]);

        let image = columns.iter().find(|c| c.id == "image").unwrap();
        assert_eq!(image.column_type, ColumnType::Image);
        assert!(image.visibility_defaults.unwrap().labeling);

        let caption = columns.iter().find(|c| c.id == "caption").unwrap();
        assert_eq!(caption.column_type, ColumnType::Unknown);
        assert!(!caption.visibility_defaults.unwrap().labeling);
        assert!(caption.visibility_defaults.unwrap().explore);

        // Declared column precedes the inferred one
        let image_pos = columns.iter().position(|c| c.id == "image").unwrap();
        let caption_pos = columns.iter().position(|c| c.id == "caption").unwrap();
        assert!(image_pos < caption_pos);
    }

    #[test]
    fn test_full_ordering() {
        let declared = DeclaredSchema::from_pairs([("image", "Image")]);
        let inferred = vec!["caption".to_string()];

        let columns = derive_columns(&declared, &inferred, &[]);
        let all_ids = ids(&columns);

        // data columns, system columns in table order, data root last
        assert_eq!(all_ids[0], "image");
        assert_eq!(all_ids[1], "caption");
        assert_eq!(all_ids[2], "id");
        assert_eq!(all_ids[all_ids.len() - 2], "annotators");
        assert_eq!(*all_ids.last().unwrap(), DATA_ROOT_ID);
    }

    #[test]
    fn test_data_root_children() {
        let declared = DeclaredSchema::from_pairs([("image", "Image")]);
        let inferred = vec!["caption".to_string()];

        let columns = derive_columns(&declared, &inferred, &[]);
        let root = columns.last().unwrap();

        assert_eq!(root.column_type, ColumnType::List);
        assert_eq!(
            root.children.as_deref(),
            Some(&["image".to_string(), "caption".to_string()][..])
        );
        assert!(root.visibility_defaults.is_none());
    }

    #[test]
    fn test_undefined_sentinel_column() {
        let declared = DeclaredSchema::new();
        let inferred = vec![UNDEFINED_FIELD.to_string()];

        let columns = derive_columns(&declared, &inferred, &[]);
        let sentinel = columns.iter().find(|c| c.id == UNDEFINED_FIELD).unwrap();

        assert_eq!(sentinel.title, "data");
        assert!(sentinel.visibility_defaults.unwrap().labeling);
    }

    #[test]
    fn test_annotators_value_domain() {
        let columns = derive_columns(&DeclaredSchema::new(), &[], &[100, 200]);
        let annotators = columns.iter().find(|c| c.id == "annotators").unwrap();

        assert_eq!(
            annotators.value_domain.as_ref().unwrap().items,
            vec![100, 200]
        );
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let declared = DeclaredSchema::from_pairs([("a", "Text"), ("b", "Image")]);
        let inferred = vec!["c".to_string(), "d".to_string()];

        let first = derive_columns(&declared, &inferred, &[1, 2]);
        let second = derive_columns(&declared, &inferred, &[1, 2]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_id_collision() {
        let declared = DeclaredSchema::from_pairs([("image", "Image")]);
        let columns = derive_columns(&declared, &[], &[]);

        let mut seen = std::collections::HashSet::new();
        for column in &columns {
            assert!(seen.insert(&column.id), "duplicate column id {}", column.id);
        }
    }

    #[cfg(test)]
    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Data-column ids equal the merged field map in order, for
            /// any declared/inferred combination.
            #[test]
            fn data_columns_match_merge(
                declared_names in prop::collection::vec("[a-z]{1,6}", 0..5),
                inferred in prop::collection::vec("[a-z]{1,6}", 0..6),
            ) {
                let mut declared = DeclaredSchema::new();
                for name in &declared_names {
                    declared.declare(name.clone(), "Text");
                }

                let merged = crate::merge::merge_fields(&declared, &inferred);
                let columns = derive_columns(&declared, &inferred, &[]);

                let data_ids: Vec<_> = columns
                    .iter()
                    .take(merged.len())
                    .map(|c| c.id.clone())
                    .collect();
                let merged_names: Vec<_> =
                    merged.iter().map(|m| m.name.clone()).collect();
                prop_assert_eq!(data_ids, merged_names);

                // Root children mirror the data columns
                let root = columns.last().unwrap();
                prop_assert_eq!(
                    root.children.clone().unwrap().len(),
                    merged.len()
                );
            }
        }
    }
}
