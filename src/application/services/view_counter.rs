//! View counting service
//!
//! Resolves the article, derives the stored client key and runs the
//! store's atomic record operation with retry on transient failures.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::domain::views::{ArticleKey, ClientId, ViewOutcome, ViewWindow};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::shared::{retry_with_backoff, RetryConfig};

pub struct ViewCounterService {
    repos: Arc<dyn RepositoryProvider>,
    window: ViewWindow,
    hash_client_ids: bool,
    retry: RetryConfig,
}

impl ViewCounterService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, window: ViewWindow, hash_client_ids: bool) -> Self {
        Self {
            repos,
            window,
            hash_client_ids,
            retry: RetryConfig::default(),
        }
    }

    /// Count one view of `key` by `client`, subject to the rate-limit
    /// window. Returns the total after the call.
    pub async fn record_view(&self, client: &ClientId, key: &ArticleKey) -> DomainResult<u64> {
        let outcome = self
            .record_view_at(client, key, Utc::now().timestamp())
            .await?;
        Ok(outcome.count)
    }

    pub async fn record_view_at(
        &self,
        client: &ClientId,
        key: &ArticleKey,
        now: i64,
    ) -> DomainResult<ViewOutcome> {
        let article_id = self.resolve(key).await?;
        let client_key = client.storage_key(self.hash_client_ids);
        let views = self.repos.views();
        let window = self.window;

        let outcome = retry_with_backoff(
            self.retry.clone(),
            || views.record(&client_key, article_id, now, window),
            DomainError::is_transient,
            "record_view",
        )
        .await?;

        if outcome.counted {
            metrics::counter!("views_recorded_total").increment(1);
        } else {
            metrics::counter!("views_rate_limited_total").increment(1);
        }
        debug!(
            article_id,
            key = %key,
            counted = outcome.counted,
            count = outcome.count,
            "View recorded"
        );

        Ok(outcome)
    }

    /// Current total without recording anything.
    pub async fn get_count(&self, key: &ArticleKey) -> DomainResult<u64> {
        let article_id = self.resolve(key).await?;
        self.repos.views().count(article_id).await
    }

    async fn resolve(&self, key: &ArticleKey) -> DomainResult<i32> {
        self.repos
            .articles()
            .resolve_id(key)
            .await?
            .ok_or_else(|| DomainError::not_found("Article", "key", key.to_string()))
    }
}
