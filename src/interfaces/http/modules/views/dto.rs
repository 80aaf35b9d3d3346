use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// `?key=` of the view counter endpoints
#[derive(Debug, Deserialize, IntoParams, Validate)]
pub struct ViewKeyQuery {
    /// Article slug (any language) or numeric article id
    pub key: Option<String>,
}

/// Current view total of an article
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CountResponse {
    pub count: u64,
}
