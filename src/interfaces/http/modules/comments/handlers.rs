//! Comment HTTP handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::domain::comment::MIN_COMMENT_LEN;
use crate::domain::{ArticleKey, NewComment, RepositoryProvider};
use crate::interfaces::http::common::{ApiError, ErrorBody, ValidatedJson, ValidatedQuery};
use crate::shared::is_valid_slug;

use super::dto::*;

#[derive(Clone)]
pub struct CommentsState {
    pub repos: Arc<dyn RepositoryProvider>,
}

fn check_slug(slug: &str) -> Result<(), ApiError> {
    if is_valid_slug(slug) {
        Ok(())
    } else {
        Err(ApiError::BadRequest("Invalid slug format".to_string()))
    }
}

#[utoipa::path(
    get,
    path = "/api/comments",
    tag = "Comments",
    params(CommentListQuery),
    responses(
        (status = 200, description = "Approved comments, newest first", body = Vec<CommentResponse>),
        (status = 400, description = "Missing or invalid post_slug", body = ErrorBody)
    )
)]
pub async fn list_comments(
    State(state): State<CommentsState>,
    ValidatedQuery(query): ValidatedQuery<CommentListQuery>,
) -> Result<Json<Vec<CommentResponse>>, ApiError> {
    let slug = query
        .post_slug
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing post_slug param".to_string()))?;
    check_slug(slug)?;

    // unknown articles simply have no comments
    let Some(article_id) = state
        .repos
        .articles()
        .resolve_id(&ArticleKey::Slug(slug.to_string()))
        .await?
    else {
        return Ok(Json(Vec::new()));
    };

    let comments = state.repos.comments().list_approved(article_id).await?;
    Ok(Json(comments.into_iter().map(CommentResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/comments",
    tag = "Comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment stored and approved", body = CreateCommentResponse),
        (status = 400, description = "Invalid input", body = ErrorBody),
        (status = 404, description = "Article not found", body = ErrorBody)
    )
)]
pub async fn create_comment(
    State(state): State<CommentsState>,
    ValidatedJson(body): ValidatedJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CreateCommentResponse>), ApiError> {
    if body.content.trim().chars().count() < MIN_COMMENT_LEN {
        return Err(ApiError::BadRequest(format!(
            "Comment content must be at least {} characters",
            MIN_COMMENT_LEN
        )));
    }
    if body.guest_name.trim().is_empty() {
        return Err(ApiError::BadRequest("guest_name is required".to_string()));
    }
    let slug = body.post_slug.trim();
    check_slug(slug)?;

    let article_id = state
        .repos
        .articles()
        .resolve_id(&ArticleKey::Slug(slug.to_string()))
        .await?
        .ok_or_else(|| ApiError::NotFound("Article not found".to_string()))?;

    let comment = NewComment::new(
        article_id,
        &body.content,
        &body.guest_name,
        body.guest_email.as_deref(),
    );
    let id = state.repos.comments().create(comment).await?;
    info!(article_id, comment_id = id, "Guest comment stored");

    Ok((
        StatusCode::CREATED,
        Json(CreateCommentResponse {
            success: true,
            message: "Comment submitted".to_string(),
            id,
        }),
    ))
}
