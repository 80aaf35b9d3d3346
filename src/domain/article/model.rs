//! Article domain entities
//!
//! An article is language-neutral; each language lives in its own
//! translation with its own slug. View counts aggregate on the article.

use chrono::{DateTime, Utc};

/// Language assumed when a listing does not ask for one.
pub const DEFAULT_LANGUAGE: &str = "vi";

#[derive(Debug, Clone)]
pub struct Article {
    pub id: i32,
    pub topic_id: Option<i32>,
    pub author_id: Option<i32>,
    pub thumbnail_url: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleTranslation {
    pub id: i32,
    pub article_id: i32,
    pub language: String,
    pub slug: String,
    pub title: String,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub meta_description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Row of the public article listing
#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub thumbnail_url: Option<String>,
    pub topic_name: Option<String>,
    pub author_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TagRef {
    pub name: String,
    pub slug: String,
}

/// A single translation together with its parent article
#[derive(Debug, Clone)]
pub struct ArticleDetail {
    pub article: Article,
    pub translation: ArticleTranslation,
    pub topic_name: Option<String>,
    pub author_name: Option<String>,
    pub tags: Vec<TagRef>,
}

/// One window of an offset-paginated listing
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub limit: u64,
    pub offset: u64,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn has_more(&self) -> bool {
        self.offset + self.limit < self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(limit: u64, offset: u64, total: u64) -> Page<()> {
        Page {
            items: Vec::new(),
            limit,
            offset,
            total,
        }
    }

    #[test]
    fn has_more_when_window_ends_before_total() {
        assert!(page(20, 0, 21).has_more());
        assert!(!page(20, 0, 20).has_more());
        assert!(!page(20, 40, 10).has_more());
    }
}
