pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::{get_article, list_articles, ArticlesState};
