//! Article DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{ArticleDetail, ArticleSummary, Page};

/// Query of `GET /api/articles`. Unparseable numbers fall back to defaults.
#[derive(Debug, Default, Deserialize, IntoParams, Validate)]
pub struct ArticleListQuery {
    /// Translation language (default `vi`)
    pub lang: Option<String>,
    /// Page size, 1..=100 (default 20)
    pub limit: Option<String>,
    /// Items to skip (default 0)
    pub offset: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
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

impl From<ArticleSummary> for ArticleSummaryDto {
    fn from(a: ArticleSummary) -> Self {
        Self {
            id: a.id,
            slug: a.slug,
            title: a.title,
            excerpt: a.excerpt,
            language: a.language,
            created_at: a.created_at,
            thumbnail_url: a.thumbnail_url,
            topic_name: a.topic_name,
            author_name: a.author_name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginationDto {
    pub limit: u64,
    pub offset: u64,
    pub total: u64,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub data: Vec<ArticleSummaryDto>,
    pub pagination: PaginationDto,
}

impl From<Page<ArticleSummary>> for ArticleListResponse {
    fn from(page: Page<ArticleSummary>) -> Self {
        let pagination = PaginationDto {
            limit: page.limit,
            offset: page.offset,
            total: page.total,
            has_more: page.has_more(),
        };
        Self {
            data: page.items.into_iter().map(ArticleSummaryDto::from).collect(),
            pagination,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TagDto {
    pub name: String,
    pub slug: String,
}

/// One translation of an article with the article's shared fields
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailDto {
    /// Article id (shared by all translations)
    pub id: i32,
    pub slug: String,
    pub language: String,
    pub title: String,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub meta_description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub is_published: bool,
    pub topic_id: Option<i32>,
    pub topic_name: Option<String>,
    pub author_id: Option<i32>,
    pub author_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<TagDto>,
}

impl From<ArticleDetail> for ArticleDetailDto {
    fn from(d: ArticleDetail) -> Self {
        Self {
            id: d.article.id,
            slug: d.translation.slug,
            language: d.translation.language,
            title: d.translation.title,
            content: d.translation.content,
            excerpt: d.translation.excerpt,
            meta_description: d.translation.meta_description,
            thumbnail_url: d.article.thumbnail_url,
            is_published: d.article.is_published,
            topic_id: d.article.topic_id,
            topic_name: d.topic_name,
            author_id: d.article.author_id,
            author_name: d.author_name,
            created_at: d.article.created_at,
            updated_at: d.translation.updated_at,
            tags: d
                .tags
                .into_iter()
                .map(|t| TagDto {
                    name: t.name,
                    slug: t.slug,
                })
                .collect(),
        }
    }
}
