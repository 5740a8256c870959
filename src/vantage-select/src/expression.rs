//! The resolved selection expression.

use serde::{Deserialize, Serialize};

use vantage_core::CollectionId;

use crate::filter::FilterNode;
use crate::selected::SelectedItems;
use crate::sort::SortKey;

/// The validated, in-memory description of which records are selected.
///
/// Constructed fresh per request by the resolver and handed to the
/// query executor; never persisted directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionExpression {
    /// Collection the selection is scoped to.
    pub scope: CollectionId,
    /// Base filter tree, passed through to the store unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterNode>,
    /// Multi-key ordering; empty leaves the store's natural order.
    #[serde(default)]
    pub ordering: Vec<SortKey>,
    /// Explicit include/exclude overlay.
    #[serde(default)]
    pub selected: SelectedItems,
}

impl SelectionExpression {
    /// Create an expression selecting everything in scope.
    pub fn all(scope: CollectionId) -> Self {
        Self {
            scope,
            filters: None,
            ordering: Vec::new(),
            selected: SelectedItems::default(),
        }
    }

    /// Set the filter tree.
    pub fn with_filters(mut self, filters: FilterNode) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Set the ordering.
    pub fn with_ordering(mut self, ordering: Vec<SortKey>) -> Self {
        self.ordering = ordering;
        self
    }

    /// Set the selection overlay.
    pub fn with_selected(mut self, selected: SelectedItems) -> Self {
        self.selected = selected;
        self
    }
}
