//! The prediction trigger.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use common_config::DispatchConfig;
use common_error::{ensure, VantageResult};
use vantage_core::{CollectionId, Record};

use crate::backend::ScoringBackend;

/// Fans a batch of records out to the scoring backends registered for
/// their collection.
///
/// Each backend call is bounded by the configured timeout; failures and
/// timeouts are reported with `log::warn!` and never abort sibling
/// dispatches. There is no automatic retry.
pub struct PredictionTrigger {
    backends: HashMap<CollectionId, Vec<Arc<dyn ScoringBackend>>>,
    dispatch: DispatchConfig,
}

impl PredictionTrigger {
    /// Create a trigger with no registered backends.
    pub fn new(dispatch: DispatchConfig) -> Self {
        Self {
            backends: HashMap::new(),
            dispatch,
        }
    }

    /// Register a backend under the collection it reports.
    pub fn register(&mut self, backend: Arc<dyn ScoringBackend>) {
        self.backends
            .entry(backend.collection())
            .or_default()
            .push(backend);
    }

    /// Number of backends registered for `scope`.
    pub fn backend_count(&self, scope: CollectionId) -> usize {
        self.backends.get(&scope).map_or(0, Vec::len)
    }

    /// Dispatch `records` to every backend of their collection.
    ///
    /// An empty batch is a no-op. Records spanning more than one
    /// collection fail with `InconsistentScope` before any backend is
    /// called.
    pub async fn trigger(&self, records: &[Record]) -> VantageResult<()> {
        let Some(first) = records.first() else {
            return Ok(());
        };
        let scope = first.collection;
        ensure!(
            records.iter().all(|record| record.collection == scope),
            InconsistentScope: "prediction dispatch takes records of a single collection"
        );

        let Some(backends) = self.backends.get(&scope) else {
            log::debug!("no scoring backends registered for collection {scope}");
            return Ok(());
        };

        let budget = Duration::from_millis(self.dispatch.per_backend_timeout_ms);
        if self.dispatch.parallel {
            let calls = backends
                .iter()
                .map(|backend| dispatch_one(backend.as_ref(), records, budget));
            futures::future::join_all(calls).await;
        } else {
            for backend in backends {
                dispatch_one(backend.as_ref(), records, budget).await;
            }
        }
        Ok(())
    }
}

/// Run one backend call under the timeout, reporting instead of
/// propagating its outcome.
async fn dispatch_one(backend: &dyn ScoringBackend, records: &[Record], budget: Duration) {
    match tokio::time::timeout(budget, backend.score_many(records)).await {
        Ok(Ok(())) => {
            log::debug!(
                "backend {} scored {} records",
                backend.name(),
                records.len()
            );
        }
        Ok(Err(err)) => {
            log::warn!("scoring backend {} failed: {err}", backend.name());
        }
        Err(_) => {
            log::warn!(
                "scoring backend {} timed out after {}ms",
                backend.name(),
                budget.as_millis()
            );
        }
    }
}
