//! The scoring backend interface.

use async_trait::async_trait;

use common_error::VantageResult;
use vantage_core::{CollectionId, Record};

/// A downstream scoring service bound to one collection.
///
/// Implementations are expected to be network-backed and slow; the
/// trigger bounds each call with a timeout and treats failures as
/// non-fatal.
#[async_trait]
pub trait ScoringBackend: Send + Sync {
    /// Human-readable backend name, used in failure reports.
    fn name(&self) -> &str;

    /// The collection this backend scores.
    fn collection(&self) -> CollectionId;

    /// Score a batch of records.
    ///
    /// Errors are reported and swallowed by the trigger; they must not
    /// leave the backend in a state that poisons later batches.
    async fn score_many(&self, records: &[Record]) -> VantageResult<()>;
}
