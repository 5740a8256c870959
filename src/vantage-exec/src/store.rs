//! The record store collaborator interface.

use async_trait::async_trait;

use common_error::VantageResult;
use vantage_core::CollectionId;
use vantage_select::{FilterNode, SelectedItems, SortKey};

use crate::stream::RecordStream;

/// Storage collaborator consumed by the query executor.
///
/// Implementations own the record data and the evaluation of filters,
/// ordering, and the selection overlay; the executor passes a resolved
/// expression through unchanged. Store-level failures surface as
/// `Query` errors.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Return the records of `scope` matching `filters`, narrowed by
    /// `selected`, in `ordering` order (natural order when empty).
    async fn filter_and_order(
        &self,
        scope: CollectionId,
        filters: Option<&FilterNode>,
        ordering: &[SortKey],
        selected: &SelectedItems,
    ) -> VantageResult<RecordStream>;
}
