//! Persisted views and the view store interface.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use common_error::VantageResult;
use vantage_core::{CollectionId, ViewId};

use crate::expression::SelectionExpression;
use crate::filter::FilterNode;
use crate::selected::SelectedItems;
use crate::sort::SortKey;

/// A persisted, named selection expression scoped to one collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    /// View identifier.
    pub id: ViewId,
    /// Owning collection. Must equal the request target on use.
    pub scope: CollectionId,
    /// Stored filter tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterNode>,
    /// Stored ordering.
    #[serde(default)]
    pub ordering: Vec<SortKey>,
    /// The view's own selection overlay.
    #[serde(default)]
    pub selected: SelectedItems,
}

impl View {
    /// Create a view selecting everything in `scope`.
    pub fn new(id: ViewId, scope: CollectionId) -> Self {
        Self {
            id,
            scope,
            filters: None,
            ordering: Vec::new(),
            selected: SelectedItems::default(),
        }
    }

    /// Set the stored filter tree.
    pub fn with_filters(mut self, filters: FilterNode) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Set the stored ordering.
    pub fn with_ordering(mut self, ordering: Vec<SortKey>) -> Self {
        self.ordering = ordering;
        self
    }

    /// Set the view's selection overlay.
    pub fn with_selected(mut self, selected: SelectedItems) -> Self {
        self.selected = selected;
        self
    }

    /// Rebuild the selection expression from the stored parameters.
    ///
    /// With `merge_selected`, the view's own selection overlay is
    /// carried into the expression; otherwise the expression selects
    /// the whole filtered scope.
    pub fn to_selection_expression(&self, merge_selected: bool) -> SelectionExpression {
        SelectionExpression {
            scope: self.scope,
            filters: self.filters.clone(),
            ordering: self.ordering.clone(),
            selected: if merge_selected {
                self.selected.clone()
            } else {
                SelectedItems::default()
            },
        }
    }
}

/// Store of persisted views, looked up by id.
#[async_trait]
pub trait ViewStore: Send + Sync {
    /// Fetch a view by id; `None` when absent.
    async fn get(&self, id: ViewId) -> VantageResult<Option<View>>;
}

/// In-memory view store for testing and embedding.
#[derive(Debug, Default)]
pub struct MemoryViewStore {
    views: RwLock<HashMap<ViewId, View>>,
}

impl MemoryViewStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a view.
    pub async fn insert(&self, view: View) {
        self.views.write().await.insert(view.id, view);
    }
}

#[async_trait]
impl ViewStore for MemoryViewStore {
    async fn get(&self, id: ViewId) -> VantageResult<Option<View>> {
        Ok(self.views.read().await.get(&id).cloned())
    }
}
