use async_trait::async_trait;

use super::{Tag, Topic};
use crate::shared::DomainResult;

#[async_trait]
pub trait TaxonomyRepository: Send + Sync {
    /// All topics, ordered by name
    async fn list_topics(&self) -> DomainResult<Vec<Topic>>;

    /// All tags, ordered by name
    async fn list_tags(&self) -> DomainResult<Vec<Tag>>;

    /// Insert a topic. A taken slug is a `Conflict`.
    async fn create_topic(
        &self,
        name: &str,
        slug: &str,
        description: Option<&str>,
    ) -> DomainResult<i32>;
}
