//! The fixed system-column table.
//!
//! System columns are constant data keyed by column id. Their ids are
//! reserved words; the uniqueness invariant is checked once at startup
//! instead of being a latent runtime collision risk.

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::column::ColumnType;

/// Id of the synthetic grouping column that parents all data columns.
pub const DATA_ROOT_ID: &str = "data";

/// Static definition of one system column.
#[derive(Debug, Clone, Copy)]
pub struct SystemColumn {
    /// Reserved column id.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Display type.
    pub column_type: ColumnType,
    /// Tooltip help text.
    pub help: Option<&'static str>,
    /// Default visibility in the explore surface.
    pub explore: bool,
    /// Default visibility in the labeling surface.
    pub labeling: bool,
}

/// The fixed, order-significant set of system columns.
pub const SYSTEM_COLUMNS: &[SystemColumn] = &[
    SystemColumn {
        id: "id",
        title: "ID",
        column_type: ColumnType::Number,
        help: Some("Record ID"),
        explore: true,
        labeling: false,
    },
    SystemColumn {
        id: "completed_at",
        title: "Completed",
        column_type: ColumnType::Datetime,
        help: Some("Last annotation date"),
        explore: true,
        labeling: false,
    },
    SystemColumn {
        id: "total_annotations",
        title: "Annotations",
        column_type: ColumnType::Number,
        help: Some("Total annotations per record"),
        explore: true,
        labeling: true,
    },
    SystemColumn {
        id: "cancelled_annotations",
        title: "Cancelled",
        column_type: ColumnType::Number,
        help: Some("Fully cancelled (skipped) annotations"),
        explore: true,
        labeling: false,
    },
    SystemColumn {
        id: "total_predictions",
        title: "Predictions",
        column_type: ColumnType::Number,
        help: Some("Total predictions per record"),
        explore: true,
        labeling: false,
    },
    SystemColumn {
        id: "annotations_results",
        title: "Annotation results",
        column_type: ColumnType::String,
        help: Some("Annotation results stacked over all annotations"),
        explore: false,
        labeling: false,
    },
    SystemColumn {
        id: "predictions_score",
        title: "Prediction score",
        column_type: ColumnType::Number,
        help: Some("Average prediction score over all record predictions"),
        explore: false,
        labeling: false,
    },
    SystemColumn {
        id: "predictions_results",
        title: "Prediction results",
        column_type: ColumnType::String,
        help: Some("Prediction results stacked over all predictions"),
        explore: false,
        labeling: false,
    },
    SystemColumn {
        id: "file_upload",
        title: "Source filename",
        column_type: ColumnType::String,
        help: Some("Source filename from the import step"),
        explore: false,
        labeling: false,
    },
    SystemColumn {
        id: "created_at",
        title: "Created at",
        column_type: ColumnType::Datetime,
        help: Some("Record creation time"),
        explore: false,
        labeling: false,
    },
    SystemColumn {
        id: "annotators",
        title: "Annotated by",
        column_type: ColumnType::List,
        help: Some("All users who completed the record"),
        explore: true,
        labeling: false,
    },
];

/// All reserved column ids: the system columns plus the data root.
///
/// Built once; panics on first use if the static table carries a
/// duplicate id, turning a latent collision into a startup invariant.
pub fn reserved_ids() -> &'static HashSet<&'static str> {
    static RESERVED: OnceLock<HashSet<&'static str>> = OnceLock::new();
    RESERVED.get_or_init(|| {
        let mut ids = HashSet::with_capacity(SYSTEM_COLUMNS.len() + 1);
        for column in SYSTEM_COLUMNS {
            if !ids.insert(column.id) {
                panic!("duplicate system column id: {}", column.id);
            }
        }
        if !ids.insert(DATA_ROOT_ID) {
            panic!("data root id collides with a system column");
        }
        ids
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_ids_are_unique() {
        let reserved = reserved_ids();
        assert_eq!(reserved.len(), SYSTEM_COLUMNS.len() + 1);
        assert!(reserved.contains("id"));
        assert!(reserved.contains(DATA_ROOT_ID));
    }

    #[test]
    fn test_table_order_is_stable() {
        let ids: Vec<_> = SYSTEM_COLUMNS.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                "id",
                "completed_at",
                "total_annotations",
                "cancelled_annotations",
                "total_predictions",
                "annotations_results",
                "predictions_score",
                "predictions_results",
                "file_upload",
                "created_at",
                "annotators",
            ]
        );
    }

    #[test]
    fn test_only_total_annotations_labeling_visible() {
        let labeling: Vec<_> = SYSTEM_COLUMNS
            .iter()
            .filter(|c| c.labeling)
            .map(|c| c.id)
            .collect();
        assert_eq!(labeling, vec!["total_annotations"]);
    }
}
