//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` - unified access to all per-aggregate repositories
//! - `DomainResult` - standard result type for domain operations

use super::article::ArticleRepository;
use super::comment::CommentRepository;
use super::taxonomy::TaxonomyRepository;
use super::views::ViewRepository;

pub use crate::shared::DomainResult;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let id = repos.articles().resolve_id(&key).await?;
///     let total = repos.views().count(id).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn articles(&self) -> &dyn ArticleRepository;
    fn views(&self) -> &dyn ViewRepository;
    fn comments(&self) -> &dyn CommentRepository;
    fn taxonomy(&self) -> &dyn TaxonomyRepository;
}
