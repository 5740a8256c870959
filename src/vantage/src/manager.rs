//! The facade over schema derivation, selection, and execution.

use std::sync::Arc;

use common_config::VantageConfig;
use common_error::VantageResult;
use vantage_core::{CollectionId, DeclaredSchema, Record, UserId};
use vantage_exec::{QueryExecutor, RecordStore, RecordStream};
use vantage_predict::PredictionTrigger;
use vantage_schema::{derive_columns, ColumnDescriptor};
use vantage_select::{SelectionRequest, SelectionResolver, ViewStore};

/// The engine's single entry point.
///
/// Owns a resolver over the view store and an executor over the record
/// store; the prediction trigger is optional and only consulted when
/// explicitly asked.
pub struct DataManager {
    resolver: SelectionResolver,
    executor: QueryExecutor,
    trigger: Option<PredictionTrigger>,
}

impl DataManager {
    /// Build a manager over the given collaborators with default
    /// configuration.
    pub fn new(view_store: Arc<dyn ViewStore>, record_store: Arc<dyn RecordStore>) -> Self {
        Self::with_config(view_store, record_store, VantageConfig::default())
    }

    /// Build a manager with explicit configuration.
    pub fn with_config(
        view_store: Arc<dyn ViewStore>,
        record_store: Arc<dyn RecordStore>,
        config: VantageConfig,
    ) -> Self {
        Self {
            resolver: SelectionResolver::new(view_store),
            executor: QueryExecutor::with_config(record_store, config.execution),
            trigger: None,
        }
    }

    /// Attach a prediction trigger.
    pub fn with_trigger(mut self, trigger: PredictionTrigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Derive the ordered column descriptor list for a collection.
    ///
    /// Pure and infallible: the result depends only on the declared
    /// schema, the field names inferred from imported data, and the
    /// member ids used for the annotators value domain.
    pub fn get_schema(
        &self,
        declared: &DeclaredSchema,
        inferred_fields: &[String],
        member_user_ids: &[UserId],
    ) -> Vec<ColumnDescriptor> {
        derive_columns(declared, inferred_fields, member_user_ids)
    }

    /// Resolve a selection request against `collection` and execute it,
    /// returning a lazy record stream.
    pub async fn resolve_selection(
        &self,
        request: &SelectionRequest,
        collection: CollectionId,
    ) -> VantageResult<RecordStream> {
        let expression = self.resolver.resolve(request, collection).await?;
        self.executor.execute(&expression).await
    }

    /// Forward records to the scoring backends of their collection.
    ///
    /// A no-op when no trigger is attached.
    pub async fn evaluate_predictions(&self, records: &[Record]) -> VantageResult<()> {
        match &self.trigger {
            Some(trigger) => trigger.trigger(records).await,
            None => Ok(()),
        }
    }
}
