//! JSON error responses
//!
//! Every error leaves the service as `{"error": "<message>"}`. Messages of
//! 5xx responses are replaced by [`GENERIC_ERROR_MESSAGE`] unless the
//! server runs in development; the underlying error is always logged.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::config::Environment;
use crate::domain::DomainError;

/// Body sent instead of internal error details in production.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Error payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unavailable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(self) -> String {
        match self {
            Self::BadRequest(m) | Self::NotFound(m) | Self::Conflict(m) | Self::Unavailable(m) => m,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound { entity, .. } => Self::NotFound(format!("{} not found", entity)),
            DomainError::Validation(msg) => Self::BadRequest(msg),
            DomainError::Conflict(msg) => Self::Conflict(msg),
            DomainError::Unavailable(msg) => Self::Unavailable(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %message, "Request rejected");
        }
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Replace 5xx bodies with a generic message outside development.
pub async fn sanitize_server_errors(
    State(environment): State<Environment>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if environment.is_development() || !response.status().is_server_error() {
        return response;
    }

    let (parts, _) = response.into_parts();
    let mut sanitized = (
        parts.status,
        Json(ErrorBody {
            error: GENERIC_ERROR_MESSAGE.to_string(),
        }),
    )
        .into_response();
    for (name, value) in parts.headers.iter() {
        if name != axum::http::header::CONTENT_LENGTH && name != axum::http::header::CONTENT_TYPE {
            sanitized.headers_mut().insert(name.clone(), value.clone());
        }
    }
    sanitized
}
