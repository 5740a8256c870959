//! The query executor.

use std::sync::Arc;

use futures::StreamExt;

use common_config::ExecutionConfig;
use common_error::{ensure, VantageResult};
use vantage_core::identifiers::DATA_PREFIX;
use vantage_schema::reserved_ids;
use vantage_select::{FilterNode, SelectionExpression};

use crate::store::RecordStore;
use crate::stream::RecordStream;

/// Executes resolved selection expressions against a record store.
///
/// The executor validates every filter field reference before touching
/// the store, then delegates evaluation wholesale; it adds no buffering
/// beyond what the store provides.
pub struct QueryExecutor {
    store: Arc<dyn RecordStore>,
    config: ExecutionConfig,
}

impl QueryExecutor {
    /// Create an executor with default execution settings.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self::with_config(store, ExecutionConfig::default())
    }

    /// Create an executor with explicit execution settings.
    pub fn with_config(store: Arc<dyn RecordStore>, config: ExecutionConfig) -> Self {
        Self { store, config }
    }

    /// Execute `expression`, returning a lazy record stream.
    ///
    /// Unknown filter field references fail with `Query` before the
    /// store is consulted; store errors propagate untranslated.
    pub async fn execute(&self, expression: &SelectionExpression) -> VantageResult<RecordStream> {
        if let Some(filters) = &expression.filters {
            validate_filter_fields(filters)?;
        }

        let stream = self
            .store
            .filter_and_order(
                expression.scope,
                expression.filters.as_ref(),
                &expression.ordering,
                &expression.selected,
            )
            .await?;

        Ok(match self.config.max_resolved_records {
            Some(limit) => Box::pin(stream.take(limit)),
            None => stream,
        })
    }
}

/// Check that every field the filter tree references is addressable:
/// either a `data.`-namespaced user field or a system column id.
fn validate_filter_fields(filters: &FilterNode) -> VantageResult<()> {
    for field in filters.referenced_fields() {
        ensure!(
            field.starts_with(DATA_PREFIX) || reserved_ids().contains(field),
            Query: "unknown filter field: {field:?}"
        );
    }
    Ok(())
}
