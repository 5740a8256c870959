//! The in-memory record store implementation.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use common_error::VantageResult;
use vantage_core::{CollectionId, Record};
use vantage_select::{FilterNode, SelectedItems, SortKey};

use crate::store::RecordStore;
use crate::stream::{vec_stream, RecordStream};

use super::eval;

/// In-memory record store for tests and embedding.
///
/// Records keep their insertion order per collection, which doubles as
/// the natural order when a selection carries no ordering keys. The
/// query path is read-only.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    collections: RwLock<HashMap<CollectionId, Vec<Record>>>,
}

impl MemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its collection.
    pub async fn insert(&self, record: Record) {
        self.collections
            .write()
            .await
            .entry(record.collection)
            .or_default()
            .push(record);
    }

    /// Append records in iteration order.
    pub async fn insert_many(&self, records: impl IntoIterator<Item = Record> + Send) {
        let mut guard = self.collections.write().await;
        for record in records {
            guard.entry(record.collection).or_default().push(record);
        }
    }

    /// Number of records stored for `scope`.
    pub async fn count(&self, scope: CollectionId) -> usize {
        self.collections
            .read()
            .await
            .get(&scope)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn filter_and_order(
        &self,
        scope: CollectionId,
        filters: Option<&FilterNode>,
        ordering: &[SortKey],
        selected: &SelectedItems,
    ) -> VantageResult<RecordStream> {
        let mut matched = {
            let guard = self.collections.read().await;
            let records = guard.get(&scope).map(Vec::as_slice).unwrap_or(&[]);

            let mut matched = Vec::with_capacity(records.len());
            for record in records {
                if let Some(node) = filters {
                    if !eval::matches(record, node)? {
                        continue;
                    }
                }
                matched.push(record.clone());
            }
            matched
        };

        match selected {
            SelectedItems::All { excluded } => {
                if !excluded.is_empty() {
                    let excluded: HashSet<_> = excluded.iter().copied().collect();
                    matched.retain(|record| !excluded.contains(&record.id));
                }
            }
            SelectedItems::Explicit { included } => {
                let included: HashSet<_> = included.iter().copied().collect();
                matched.retain(|record| included.contains(&record.id));
            }
        }

        // Multi-key sort: apply keys last-to-first, relying on sort_by
        // stability so earlier keys dominate.
        for key in ordering.iter().rev() {
            matched.sort_by(|a, b| eval::compare_by_key(a, b, key));
        }

        Ok(vec_stream(matched))
    }
}
