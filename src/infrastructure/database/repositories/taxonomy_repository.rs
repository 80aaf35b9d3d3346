//! SeaORM implementation of TaxonomyRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, SqlErr};

use crate::domain::taxonomy::{Tag, TaxonomyRepository, Topic};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{tag, topic};

pub struct SeaOrmTaxonomyRepository {
    db: DatabaseConnection,
}

impl SeaOrmTaxonomyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaxonomyRepository for SeaOrmTaxonomyRepository {
    async fn list_topics(&self) -> DomainResult<Vec<Topic>> {
        let models = topic::Entity::find()
            .order_by_asc(topic::Column::Name)
            .all(&self.db)
            .await?;
        Ok(models
            .into_iter()
            .map(|m| Topic {
                id: m.id,
                name: m.name,
                slug: m.slug,
                description: m.description,
            })
            .collect())
    }

    async fn list_tags(&self) -> DomainResult<Vec<Tag>> {
        let models = tag::Entity::find()
            .order_by_asc(tag::Column::Name)
            .all(&self.db)
            .await?;
        Ok(models
            .into_iter()
            .map(|m| Tag {
                id: m.id,
                name: m.name,
                slug: m.slug,
            })
            .collect())
    }

    async fn create_topic(
        &self,
        name: &str,
        slug: &str,
        description: Option<&str>,
    ) -> DomainResult<i32> {
        let model = topic::ActiveModel {
            name: Set(name.to_string()),
            slug: Set(slug.to_string()),
            description: Set(description.map(String::from)),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                DomainError::Conflict("Topic with this slug already exists".to_string())
            }
            _ => e.into(),
        })?;
        Ok(model.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::repositories::test_support::{seed_tag, test_db};

    #[tokio::test]
    async fn lists_are_sorted_by_name() {
        let db = test_db().await;
        let repo = SeaOrmTaxonomyRepository::new(db.clone());
        repo.create_topic("Travel", "travel", Some("Trips")).await.unwrap();
        repo.create_topic("Food", "food", None).await.unwrap();
        seed_tag(&db, "rust", "rust").await;
        seed_tag(&db, "axum", "axum").await;

        let topics = repo.list_topics().await.unwrap();
        assert_eq!(topics[0].slug, "food");
        assert_eq!(topics[1].description.as_deref(), Some("Trips"));

        let tags: Vec<_> = repo.list_tags().await.unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(tags, ["axum", "rust"]);
    }

    #[tokio::test]
    async fn duplicate_topic_slug_is_a_conflict() {
        let repo = SeaOrmTaxonomyRepository::new(test_db().await);
        repo.create_topic("Rust", "rust", None).await.unwrap();
        let err = repo.create_topic("Rust again", "rust", None).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }
}
