//! SeaORM implementation of RepositoryProvider

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::domain::article::ArticleRepository;
use crate::domain::comment::CommentRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::taxonomy::TaxonomyRepository;
use crate::domain::views::ViewRepository;

use super::article_repository::SeaOrmArticleRepository;
use super::comment_repository::SeaOrmCommentRepository;
use super::taxonomy_repository::SeaOrmTaxonomyRepository;
use super::view_repository::SeaOrmViewRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
/// The view store can be swapped for another [`ViewRepository`] (the
/// in-memory store in development).
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let id = repos.articles().resolve_id(&key).await?;
/// let total = repos.views().count(id).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    articles: SeaOrmArticleRepository,
    comments: SeaOrmCommentRepository,
    taxonomy: SeaOrmTaxonomyRepository,
    views: Arc<dyn ViewRepository>,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            articles: SeaOrmArticleRepository::new(db.clone()),
            comments: SeaOrmCommentRepository::new(db.clone()),
            taxonomy: SeaOrmTaxonomyRepository::new(db.clone()),
            views: Arc::new(SeaOrmViewRepository::new(db)),
        }
    }

    /// Replace the SQL view store.
    pub fn with_view_store(mut self, views: Arc<dyn ViewRepository>) -> Self {
        self.views = views;
        self
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn articles(&self) -> &dyn ArticleRepository {
        &self.articles
    }

    fn views(&self) -> &dyn ViewRepository {
        self.views.as_ref()
    }

    fn comments(&self) -> &dyn CommentRepository {
        &self.comments
    }

    fn taxonomy(&self) -> &dyn TaxonomyRepository {
        &self.taxonomy
    }
}
