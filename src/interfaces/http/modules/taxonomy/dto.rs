use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Tag, Topic};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopicResponse {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl From<Topic> for TopicResponse {
    fn from(t: Topic) -> Self {
        Self {
            id: t.id,
            name: t.name,
            slug: t.slug,
            description: t.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TagResponse {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

impl From<Tag> for TagResponse {
    fn from(t: Tag) -> Self {
        Self {
            id: t.id,
            name: t.name,
            slug: t.slug,
        }
    }
}

/// Body of `POST /api/topics`. Absent fields read as empty.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateTopicRequest {
    #[validate(length(max = 100))]
    pub name: String,
    #[validate(length(max = 100))]
    pub slug: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateTopicResponse {
    pub success: bool,
    pub id: i32,
}
