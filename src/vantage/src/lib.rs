//! Vantage: a dynamic record selection and column-projection engine.
//!
//! Glues the member crates together behind one entry point:
//!
//! - schema derivation ([`vantage_schema::derive_columns`])
//! - selection resolution ([`vantage_select::SelectionResolver`])
//! - query execution ([`vantage_exec::QueryExecutor`])
//! - prediction dispatch ([`vantage_predict::PredictionTrigger`])
//!
//! [`DataManager`] is the produced interface; everything else re-exports
//! the member crates for embedders that need the pieces directly.

pub mod manager;

pub use manager::DataManager;

pub use common_config::{DispatchConfig, ExecutionConfig, VantageConfig};
pub use common_error::{VantageError, VantageResult};
pub use vantage_core::{CollectionId, DeclaredSchema, Record, RecordId, UserId, Value, ViewId};
pub use vantage_exec::{
    MemoryRecordStore, QueryExecutor, RecordStore, RecordStream, RecordStreamExt,
};
pub use vantage_predict::{PredictionTrigger, ScoringBackend};
pub use vantage_schema::{derive_columns, ColumnDescriptor, ColumnType};
pub use vantage_select::{
    FilterNode, MemoryViewStore, PredicateOp, SelectedItems, SelectionExpression,
    SelectionRequest, SelectionResolver, SortKey, View, ViewStore,
};
