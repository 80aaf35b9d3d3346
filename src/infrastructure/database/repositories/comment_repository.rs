//! SeaORM implementation of CommentRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::comment::{Comment, CommentRepository, NewComment};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{comment, user};

pub struct SeaOrmCommentRepository {
    db: DatabaseConnection,
}

impl SeaOrmCommentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for SeaOrmCommentRepository {
    async fn list_approved(&self, article_id: i32) -> DomainResult<Vec<Comment>> {
        let rows = comment::Entity::find()
            .find_also_related(user::Entity)
            .filter(comment::Column::ArticleId.eq(article_id))
            .filter(comment::Column::IsApproved.eq(true))
            .order_by_desc(comment::Column::CreatedAt)
            .order_by_desc(comment::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(c, author)| Comment {
                id: c.id,
                article_id: c.article_id,
                content: c.content,
                created_at: c.created_at,
                guest_name: c.guest_name,
                username: author.map(|u| u.username),
            })
            .collect())
    }

    async fn create(&self, new: NewComment) -> DomainResult<i32> {
        let model = comment::ActiveModel {
            article_id: Set(new.article_id),
            user_id: Set(None),
            content: Set(new.content),
            guest_name: Set(Some(new.guest_name)),
            guest_email: Set(new.guest_email),
            is_approved: Set(true),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        debug!("Comment {} stored for article {}", model.id, model.article_id);
        Ok(model.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::repositories::test_support::{seed_article, test_db};

    #[tokio::test]
    async fn guest_comments_are_listed_newest_first() {
        let db = test_db().await;
        let id = seed_article(&db, "my-post").await;
        let repo = SeaOrmCommentRepository::new(db);

        repo.create(NewComment::new(id, "first!", "An", None))
            .await
            .unwrap();
        repo.create(NewComment::new(id, "second", "Binh", Some("b@example.com")))
            .await
            .unwrap();

        let comments = repo.list_approved(id).await.unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].content, "second");
        assert_eq!(comments[1].guest_name.as_deref(), Some("An"));
        assert!(comments.iter().all(|c| c.username.is_none()));
    }

    #[tokio::test]
    async fn unapproved_comments_are_hidden() {
        let db = test_db().await;
        let id = seed_article(&db, "my-post").await;

        comment::ActiveModel {
            article_id: Set(id),
            user_id: Set(None),
            content: Set("spam".to_string()),
            guest_name: Set(Some("bot".to_string())),
            guest_email: Set(None),
            is_approved: Set(false),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let repo = SeaOrmCommentRepository::new(db);
        assert!(repo.list_approved(id).await.unwrap().is_empty());
    }
}
