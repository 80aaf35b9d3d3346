//! Database entities module

pub mod article;
pub mod article_tag;
pub mod article_translation;
pub mod comment;
pub mod post_view;
pub mod rate_limit;
pub mod tag;
pub mod topic;
pub mod user;

pub use article::Entity as Article;
pub use article_tag::Entity as ArticleTag;
pub use article_translation::Entity as ArticleTranslation;
pub use comment::Entity as Comment;
pub use post_view::Entity as PostView;
pub use rate_limit::Entity as RateLimit;
pub use tag::Entity as Tag;
pub use topic::Entity as Topic;
pub use user::Entity as User;
