//! Article repository interface

use async_trait::async_trait;

use super::{ArticleDetail, ArticleSummary, Page};
use crate::domain::views::ArticleKey;
use crate::shared::DomainResult;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Map a slug or id to the canonical article id.
    ///
    /// A numeric key that matches no article id is retried as a slug.
    async fn resolve_id(&self, key: &ArticleKey) -> DomainResult<Option<i32>>;

    /// Published translations in `language`, newest article first.
    async fn list_published(
        &self,
        language: &str,
        limit: u64,
        offset: u64,
    ) -> DomainResult<Page<ArticleSummary>>;

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<ArticleDetail>>;
}
