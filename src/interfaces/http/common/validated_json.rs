//! JSON body extractor that also runs `validator` rules.
//!
//! Rejections are plain [`ApiError::BadRequest`]s, so a bad comment body
//! produces the same `{"error": ...}` shape as every other client error.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::ApiError;

/// Like `axum::Json<T>`, but the value has passed `T::validate()`.
pub struct ValidatedJson<T>(pub T);

/// One `"field: message"` entry per failed rule, sorted by field name.
pub(super) fn describe(errors: &ValidationErrors) -> String {
    let mut entries: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{}: {}", field, msg),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect();
    entries.sort();

    if entries.is_empty() {
        "Validation failed".to_string()
    } else {
        entries.join("; ")
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(format!("Invalid JSON body: {}", rejection.body_text())))?;

        value
            .validate()
            .map_err(|errors| ApiError::BadRequest(describe(&errors)))?;

        Ok(Self(value))
    }
}
