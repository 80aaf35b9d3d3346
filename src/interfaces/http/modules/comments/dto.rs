use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::Comment;

#[derive(Debug, Deserialize, IntoParams, Validate)]
pub struct CommentListQuery {
    /// Slug of any translation of the article
    pub post_slug: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub guest_name: Option<String>,
    /// Set for comments left by registered users
    pub username: Option<String>,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            content: c.content,
            created_at: c.created_at,
            guest_name: c.guest_name,
            username: c.username,
        }
    }
}

/// Blank strings count as absent.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()).map(|v| v.trim().to_string()))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCommentRequest {
    pub post_slug: String,
    pub content: String,
    #[validate(length(min = 1, max = 100, message = "guest_name is required"))]
    pub guest_name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(email(message = "Invalid email format"))]
    pub guest_email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentResponse {
    pub success: bool,
    pub message: String,
    pub id: i32,
}
