//! Property suites over the in-memory store's selection semantics.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use vantage_core::{Record, RecordId};
    use vantage_select::{SelectedItems, SortKey};

    use crate::memory::MemoryRecordStore;
    use crate::store::RecordStore;
    use crate::stream::RecordStreamExt;

    /// Ids drawn from a small pool so excluded/included sets overlap
    /// the stored records often.
    fn arb_ids() -> impl Strategy<Value = Vec<RecordId>> {
        prop::collection::hash_set(1u64..40, 0..20).prop_map(|set| set.into_iter().collect())
    }

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    async fn selected_ids(stored: Vec<RecordId>, selected: SelectedItems) -> Vec<RecordId> {
        let store = MemoryRecordStore::new();
        store
            .insert_many(stored.into_iter().map(|id| Record::new(id, 1)))
            .await;
        store
            .filter_and_order(1, None, &[], &selected)
            .await
            .unwrap()
            .collect_vec()
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect()
    }

    proptest! {
        /// An `All` selection never yields an excluded id.
        #[test]
        fn all_never_yields_excluded(stored in arb_ids(), excluded in arb_ids()) {
            let result = block_on(selected_ids(
                stored,
                SelectedItems::All { excluded: excluded.clone() },
            ));
            let excluded: HashSet<_> = excluded.into_iter().collect();
            prop_assert!(result.iter().all(|id| !excluded.contains(id)));
        }

        /// An `Explicit` selection yields a subset of the included ids.
        #[test]
        fn explicit_yields_subset_of_included(stored in arb_ids(), included in arb_ids()) {
            let result = block_on(selected_ids(
                stored,
                SelectedItems::Explicit { included: included.clone() },
            ));
            let included: HashSet<_> = included.into_iter().collect();
            prop_assert!(result.iter().all(|id| included.contains(id)));
        }

        /// Sorting an already-sorted selection changes nothing.
        #[test]
        fn single_key_sort_is_stable_under_resort(
            entries in prop::collection::vec((1u64..1000, 0i64..10), 0..30),
        ) {
            let result = block_on(async {
                let store = MemoryRecordStore::new();
                store
                    .insert_many(entries.iter().enumerate().map(|(i, (_, created))| {
                        Record::new(i as u64 + 1, 1).with_created_at(*created)
                    }))
                    .await;

                let ordering = [SortKey::asc("created_at")];
                let first = store
                    .filter_and_order(1, None, &ordering, &SelectedItems::default())
                    .await
                    .unwrap()
                    .collect_vec()
                    .await
                    .unwrap();

                let resorted = MemoryRecordStore::new();
                resorted.insert_many(first.clone()).await;
                let second = resorted
                    .filter_and_order(1, None, &ordering, &SelectedItems::default())
                    .await
                    .unwrap()
                    .collect_vec()
                    .await
                    .unwrap();

                (first, second)
            });
            let (first, second) = result;
            prop_assert_eq!(
                first.iter().map(|r| r.id).collect::<Vec<_>>(),
                second.iter().map(|r| r.id).collect::<Vec<_>>()
            );
        }
    }
}
