//! In-memory view store
//!
//! Same contract as the SQL store, for development without a database
//! file. State is lost on restart.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::views::{ViewOutcome, ViewRepository, ViewWindow};
use crate::domain::DomainResult;

/// DashMap-backed counters and rate-limit marks.
///
/// `record` holds the mark's shard lock while it touches the counter, and
/// always locks marks before counters, so a (client, article) pair cannot
/// double count and increments are never lost.
#[derive(Default)]
pub struct InMemoryViewStore {
    marks: DashMap<(String, i32), i64>,
    counters: DashMap<i32, u64>,
}

impl InMemoryViewStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ViewRepository for InMemoryViewStore {
    async fn record(
        &self,
        client_key: &str,
        article_id: i32,
        now: i64,
        window: ViewWindow,
    ) -> DomainResult<ViewOutcome> {
        let (mark, counted) = match self.marks.entry((client_key.to_string(), article_id)) {
            Entry::Vacant(slot) => (slot.insert(now), true),
            Entry::Occupied(slot) => {
                let mut mark = slot.into_ref();
                let countable = window.is_countable(Some(*mark), now);
                if countable {
                    *mark = now;
                }
                (mark, countable)
            }
        };

        let count = if counted {
            let mut counter = self.counters.entry(article_id).or_insert(0);
            *counter += 1;
            *counter
        } else {
            self.counters.get(&article_id).map(|c| *c).unwrap_or(0)
        };
        drop(mark);

        Ok(ViewOutcome { count, counted })
    }

    async fn count(&self, article_id: i32) -> DomainResult<u64> {
        Ok(self.counters.get(&article_id).map(|c| *c).unwrap_or(0))
    }

    async fn purge_marks_before(&self, cutoff: i64) -> DomainResult<u64> {
        let mut removed = 0;
        self.marks.retain(|_, last_viewed| {
            let keep = *last_viewed >= cutoff;
            if !keep {
                removed += 1;
            }
            keep
        });
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const W: ViewWindow = ViewWindow::DEFAULT;

    #[tokio::test]
    async fn window_is_enforced_per_client() {
        let store = InMemoryViewStore::new();

        assert_eq!(store.record("a", 1, 1_000, W).await.unwrap().count, 1);
        assert_eq!(store.record("a", 1, 1_100, W).await.unwrap().count, 1);
        assert_eq!(store.record("b", 1, 1_100, W).await.unwrap().count, 2);

        let out = store.record("a", 1, 1_301, W).await.unwrap();
        assert_eq!(out, ViewOutcome { count: 3, counted: true });
    }

    #[tokio::test]
    async fn concurrent_records_are_all_counted() {
        let store = Arc::new(InMemoryViewStore::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .record(&format!("client-{}", i), 7, 1_000, W)
                        .await
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.count(7).await.unwrap(), 64);
    }

    #[tokio::test]
    async fn purge_keeps_live_marks() {
        let store = InMemoryViewStore::new();
        store.record("old", 1, 100, W).await.unwrap();
        store.record("new", 1, 600, W).await.unwrap();

        assert_eq!(store.purge_marks_before(500).await.unwrap(), 1);
        // purged client counts again immediately
        assert!(store.record("old", 1, 650, W).await.unwrap().counted);
        assert!(!store.record("new", 1, 650, W).await.unwrap().counted);
    }
}
