//! Article aggregate
//!
//! Articles, their per-language translations, and the repository interface.

pub mod model;
pub mod repository;

pub use model::{
    Article, ArticleDetail, ArticleSummary, ArticleTranslation, Page, TagRef, DEFAULT_LANGUAGE,
};
pub use repository::ArticleRepository;
