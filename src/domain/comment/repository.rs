use async_trait::async_trait;

use super::{Comment, NewComment};
use crate::shared::DomainResult;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Approved comments of an article, newest first
    async fn list_approved(&self, article_id: i32) -> DomainResult<Vec<Comment>>;

    /// Store a guest comment. Guest comments are approved on arrival.
    async fn create(&self, comment: NewComment) -> DomainResult<i32>;
}
