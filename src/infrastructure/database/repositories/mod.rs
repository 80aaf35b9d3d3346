//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod article_repository;
pub mod comment_repository;
pub mod repository_provider;
pub mod taxonomy_repository;
pub mod view_repository;

pub use article_repository::SeaOrmArticleRepository;
pub use comment_repository::SeaOrmCommentRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use taxonomy_repository::SeaOrmTaxonomyRepository;
pub use view_repository::SeaOrmViewRepository;

#[cfg(test)]
pub(crate) mod test_support;
