//! Selection resolution: persisted view vs. inline request data.

use std::sync::Arc;

use common_error::{ensure, VantageError, VantageResult};
use vantage_core::CollectionId;

use crate::expression::SelectionExpression;
use crate::request::{SelectionRequest, SelectionSource};
use crate::selected::SelectedItems;
use crate::sort::SortKey;
use crate::view::ViewStore;

/// Resolves a request into one [`SelectionExpression`].
///
/// A view reference always wins over inline selection fields; the two
/// paths are mutually exclusive per request. No side effects beyond the
/// view fetch.
pub struct SelectionResolver {
    view_store: Arc<dyn ViewStore>,
}

impl SelectionResolver {
    /// Create a resolver over the given view store.
    pub fn new(view_store: Arc<dyn ViewStore>) -> Self {
        Self { view_store }
    }

    /// Resolve `request` against the target collection.
    ///
    /// Fails with `NotFound` when a referenced view is absent,
    /// `ScopeMismatch` when the view belongs to another collection, and
    /// `Validation` when inline payload fields are malformed.
    pub async fn resolve(
        &self,
        request: &SelectionRequest,
        target: CollectionId,
    ) -> VantageResult<SelectionExpression> {
        match request.source() {
            SelectionSource::ViewSourced(view_id) => {
                let view = self
                    .view_store
                    .get(view_id)
                    .await?
                    .ok_or_else(|| VantageError::not_found(format!("view {view_id} not found")))?;
                ensure!(
                    view.scope == target,
                    ScopeMismatch:
                    "view {} belongs to collection {}, request targets collection {}",
                    view_id,
                    view.scope,
                    target
                );
                Ok(view.to_selection_expression(true))
            }
            SelectionSource::Inline => {
                let selected = match &request.selected_items {
                    Some(value) => SelectedItems::from_json(value)?,
                    None => SelectedItems::default(),
                };
                let ordering = request
                    .ordering
                    .iter()
                    .map(|param| SortKey::parse(param))
                    .collect::<VantageResult<Vec<_>>>()?;

                Ok(SelectionExpression {
                    scope: target,
                    filters: request.filters.clone(),
                    ordering,
                    selected,
                })
            }
        }
    }
}
