//! Query-string counterpart of [`super::ValidatedJson`].

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::validated_json::describe;
use super::ApiError;

/// Like `axum::extract::Query<T>`, but a malformed query string or a
/// failed rule is a JSON 400 instead of axum's plain-text rejection.
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::BadRequest(describe(&errors)))?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    use crate::interfaces::http::common::ErrorBody;

    #[derive(Debug, Deserialize, Validate)]
    struct Lookup {
        key: Option<String>,
        #[validate(range(max = 50))]
        limit: Option<u32>,
    }

    async fn lookup(ValidatedQuery(q): ValidatedQuery<Lookup>) -> String {
        q.key.unwrap_or_default()
    }

    async fn get_uri(uri: &str) -> (StatusCode, Option<String>, String) {
        let resp = Router::new()
            .route("/lookup", get(lookup))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let content_type = resp
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn passes_query_through() {
        let (status, _, body) = get_uri("/lookup?key=my-post").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "my-post");
    }

    #[tokio::test]
    async fn duplicate_parameter_is_a_json_error() {
        let (status, content_type, body) = get_uri("/lookup?key=a&key=b").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let err: ErrorBody = serde_json::from_str(&body).unwrap();
        assert!(err.error.contains("duplicate field `key`"), "{}", err.error);
    }

    #[tokio::test]
    async fn rule_failure_is_a_json_error() {
        let (status, _, body) = get_uri("/lookup?limit=99").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let err: ErrorBody = serde_json::from_str(&body).unwrap();
        assert_eq!(err.error, "limit: range");
    }
}
