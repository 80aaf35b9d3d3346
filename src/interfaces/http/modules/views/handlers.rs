//! View counter HTTP handlers
//!
//! `POST` records a view, `GET` only reads. Both answer `{"count": n}`.

use std::sync::Arc;

use axum::extract::{FromRef, State};
use axum::Json;

use crate::application::ViewCounterService;
use crate::domain::ArticleKey;
use crate::interfaces::http::common::{
    ApiError, ClientIp, ClientIpHeader, ErrorBody, ValidatedQuery,
};

use super::dto::{CountResponse, ViewKeyQuery};

#[derive(Clone, FromRef)]
pub struct ViewsState {
    pub service: Arc<ViewCounterService>,
    pub client_ip: ClientIpHeader,
}

#[utoipa::path(
    post,
    path = "/increment",
    tag = "Views",
    params(ViewKeyQuery),
    responses(
        (status = 200, description = "Total after this view", body = CountResponse),
        (status = 400, description = "Missing key or invalid slug", body = ErrorBody),
        (status = 404, description = "Article not found", body = ErrorBody),
        (status = 500, description = "Store unavailable", body = ErrorBody)
    )
)]
pub async fn record_view(
    State(state): State<ViewsState>,
    ClientIp(client): ClientIp,
    ValidatedQuery(query): ValidatedQuery<ViewKeyQuery>,
) -> Result<Json<CountResponse>, ApiError> {
    let key = ArticleKey::parse(query.key.as_deref())?;
    let count = state.service.record_view(&client, &key).await?;
    Ok(Json(CountResponse { count }))
}

#[utoipa::path(
    get,
    path = "/increment",
    tag = "Views",
    params(ViewKeyQuery),
    responses(
        (status = 200, description = "Current total, nothing recorded", body = CountResponse),
        (status = 400, description = "Missing key or invalid slug", body = ErrorBody),
        (status = 404, description = "Article not found", body = ErrorBody),
        (status = 500, description = "Store unavailable", body = ErrorBody)
    )
)]
pub async fn get_view_count(
    State(state): State<ViewsState>,
    ValidatedQuery(query): ValidatedQuery<ViewKeyQuery>,
) -> Result<Json<CountResponse>, ApiError> {
    let key = ArticleKey::parse(query.key.as_deref())?;
    let count = state.service.get_count(&key).await?;
    Ok(Json(CountResponse { count }))
}
