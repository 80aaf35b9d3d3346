pub mod article;
pub mod comment;
pub mod repositories;
pub mod taxonomy;
pub mod views;

// Re-export commonly used types
pub use article::{ArticleDetail, ArticleRepository, ArticleSummary, Page};
pub use comment::{Comment, CommentRepository, NewComment};
pub use repositories::{DomainResult, RepositoryProvider};
pub use taxonomy::{Tag, TaxonomyRepository, Topic};
pub use views::{ArticleKey, ClientId, ViewOutcome, ViewRepository, ViewWindow};

pub use crate::shared::errors::DomainError;
