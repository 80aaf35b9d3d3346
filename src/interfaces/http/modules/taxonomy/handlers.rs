use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{ApiError, ErrorBody, ValidatedJson};
use crate::shared::is_valid_slug;

use super::dto::{CreateTopicRequest, CreateTopicResponse, TagResponse, TopicResponse};

#[derive(Clone)]
pub struct TaxonomyState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/topics",
    tag = "Taxonomy",
    responses((status = 200, description = "All topics by name", body = Vec<TopicResponse>))
)]
pub async fn list_topics(
    State(state): State<TaxonomyState>,
) -> Result<Json<Vec<TopicResponse>>, ApiError> {
    let topics = state.repos.taxonomy().list_topics().await?;
    Ok(Json(topics.into_iter().map(TopicResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/tags",
    tag = "Taxonomy",
    responses((status = 200, description = "All tags by name", body = Vec<TagResponse>))
)]
pub async fn list_tags(State(state): State<TaxonomyState>) -> Result<Json<Vec<TagResponse>>, ApiError> {
    let tags = state.repos.taxonomy().list_tags().await?;
    Ok(Json(tags.into_iter().map(TagResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/topics",
    tag = "Taxonomy",
    request_body = CreateTopicRequest,
    responses(
        (status = 201, description = "Topic created", body = CreateTopicResponse),
        (status = 400, description = "Missing field or invalid slug", body = ErrorBody),
        (status = 409, description = "Slug already taken", body = ErrorBody)
    )
)]
pub async fn create_topic(
    State(state): State<TaxonomyState>,
    ValidatedJson(body): ValidatedJson<CreateTopicRequest>,
) -> Result<(StatusCode, Json<CreateTopicResponse>), ApiError> {
    let name = body.name.trim();
    let slug = body.slug.trim();
    for (field, value) in [("name", name), ("slug", slug)] {
        if value.is_empty() {
            return Err(ApiError::BadRequest(format!("Missing or empty field: {}", field)));
        }
    }
    if !is_valid_slug(slug) {
        return Err(ApiError::BadRequest(
            "Invalid slug format. Use only letters, numbers, hyphens, and underscores".to_string(),
        ));
    }
    let description = body
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());

    let id = state
        .repos
        .taxonomy()
        .create_topic(name, slug, description)
        .await?;
    info!(topic_id = id, slug, "Topic created");

    Ok((StatusCode::CREATED, Json(CreateTopicResponse { success: true, id })))
}
