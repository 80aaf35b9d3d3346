//! Fixtures for repository, service and router tests.
//!
//! Articles, tags and users have no write API, so tests insert them here.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set, TransactionTrait,
};
use sea_orm_migration::MigratorTrait;

use crate::infrastructure::database::entities::{
    article, article_tag, article_translation, tag, user,
};
use crate::infrastructure::database::migrator::Migrator;

/// Fresh migrated in-memory database. One connection, since every
/// `sqlite::memory:` connection opens its own database.
pub async fn test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(opts).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub struct NewTranslation {
    pub language: &'static str,
    pub slug: String,
    pub title: String,
}

impl NewTranslation {
    pub fn new(language: &'static str, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            language,
            slug: slug.into(),
            title: title.into(),
        }
    }
}

#[derive(Default)]
pub struct NewArticle {
    pub topic_id: Option<i32>,
    pub author_id: Option<i32>,
    pub is_published: bool,
    pub translations: Vec<NewTranslation>,
    pub tag_ids: Vec<i32>,
}

/// Published article translated into `vi` and `en`.
pub fn published(slug_vi: &str, slug_en: &str) -> NewArticle {
    NewArticle {
        is_published: true,
        translations: vec![
            NewTranslation::new("vi", slug_vi, format!("VI {}", slug_vi)),
            NewTranslation::new("en", slug_en, format!("EN {}", slug_en)),
        ],
        ..Default::default()
    }
}

pub async fn create_article(db: &DatabaseConnection, new: NewArticle) -> i32 {
    let now = Utc::now();
    let txn = db.begin().await.unwrap();

    let created = article::ActiveModel {
        topic_id: Set(new.topic_id),
        author_id: Set(new.author_id),
        thumbnail_url: Set(None),
        is_published: Set(new.is_published),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .unwrap();

    for t in new.translations {
        article_translation::ActiveModel {
            article_id: Set(created.id),
            language: Set(t.language.to_string()),
            slug: Set(t.slug),
            title: Set(t.title),
            content: Set(Some("body".to_string())),
            excerpt: Set(None),
            meta_description: Set(None),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .unwrap();
    }

    for tag_id in new.tag_ids {
        article_tag::ActiveModel {
            article_id: Set(created.id),
            tag_id: Set(tag_id),
        }
        .insert(&txn)
        .await
        .unwrap();
    }

    txn.commit().await.unwrap();
    created.id
}

/// Published article with a single `vi` translation.
pub async fn seed_article(db: &DatabaseConnection, slug: &str) -> i32 {
    create_article(
        db,
        NewArticle {
            is_published: true,
            translations: vec![NewTranslation::new("vi", slug, slug.to_uppercase())],
            ..Default::default()
        },
    )
    .await
}

pub async fn seed_tag(db: &DatabaseConnection, name: &str, slug: &str) -> i32 {
    tag::ActiveModel {
        name: Set(name.to_string()),
        slug: Set(slug.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .id
}

pub async fn seed_author(db: &DatabaseConnection, username: &str) -> i32 {
    user::ActiveModel {
        username: Set(username.to_string()),
        email: Set(format!("{}@example.com", username)),
        role: Set(user::UserRole::Author),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .id
}
