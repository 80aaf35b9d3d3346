//! Public article HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use crate::domain::article::DEFAULT_LANGUAGE;
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{ApiError, ErrorBody, ValidatedQuery};
use crate::shared::{is_valid_slug, clamp_page};

use super::dto::*;

#[derive(Clone)]
pub struct ArticlesState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/articles",
    tag = "Articles",
    params(ArticleListQuery),
    responses(
        (status = 200, description = "Published articles, newest first", body = ArticleListResponse)
    )
)]
pub async fn list_articles(
    State(state): State<ArticlesState>,
    ValidatedQuery(query): ValidatedQuery<ArticleListQuery>,
) -> Result<Json<ArticleListResponse>, ApiError> {
    let language = query
        .lang
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LANGUAGE)
        .to_lowercase();
    let (limit, offset) = clamp_page(
        query.limit.as_deref().and_then(|v| v.trim().parse().ok()),
        query.offset.as_deref().and_then(|v| v.trim().parse().ok()),
    );

    let page = state
        .repos
        .articles()
        .list_published(&language, limit, offset)
        .await?;
    Ok(Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/articles/{slug}",
    tag = "Articles",
    params(("slug" = String, Path, description = "Translation slug")),
    responses(
        (status = 200, description = "Article translation with tags", body = ArticleDetailDto),
        (status = 400, description = "Invalid slug format", body = ErrorBody),
        (status = 404, description = "Article not found", body = ErrorBody)
    )
)]
pub async fn get_article(
    State(state): State<ArticlesState>,
    Path(slug): Path<String>,
) -> Result<Json<ArticleDetailDto>, ApiError> {
    if !is_valid_slug(&slug) {
        return Err(ApiError::BadRequest("Invalid slug format".to_string()));
    }

    let detail = state
        .repos
        .articles()
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound("Article not found".to_string()))?;
    Ok(Json(detail.into()))
}
