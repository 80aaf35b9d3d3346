//! View store interface

use async_trait::async_trait;

use super::{ViewOutcome, ViewWindow};
use crate::shared::DomainResult;

#[async_trait]
pub trait ViewRepository: Send + Sync {
    /// Record one view of `article_id` by `client_key` at unix time `now`.
    ///
    /// Implementations must apply the mark check, the mark write and the
    /// counter increment as one atomic unit: concurrent callers never lose
    /// increments, and a (client, article) pair is counted at most once per
    /// `window`.
    async fn record(
        &self,
        client_key: &str,
        article_id: i32,
        now: i64,
        window: ViewWindow,
    ) -> DomainResult<ViewOutcome>;

    /// Current total; 0 for an article that was never counted.
    async fn count(&self, article_id: i32) -> DomainResult<u64>;

    /// Delete marks stamped before `cutoff`. Returns how many were removed.
    async fn purge_marks_before(&self, cutoff: i64) -> DomainResult<u64>;
}
