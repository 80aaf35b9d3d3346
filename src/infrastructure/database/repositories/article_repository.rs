//! SeaORM implementation of ArticleRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::domain::article::{
    Article, ArticleDetail, ArticleRepository, ArticleSummary, ArticleTranslation, Page, TagRef,
};
use crate::domain::views::ArticleKey;
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{
    article, article_tag, article_translation, tag, topic, user,
};

pub struct SeaOrmArticleRepository {
    db: DatabaseConnection,
}

impl SeaOrmArticleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn id_for_slug(&self, slug: &str) -> DomainResult<Option<i32>> {
        let row = article_translation::Entity::find()
            .filter(article_translation::Column::Slug.eq(slug))
            .one(&self.db)
            .await?;
        Ok(row.map(|t| t.article_id))
    }
}

// ── Conversion helpers ──────────────────────────────────────────

#[derive(Debug, FromQueryResult)]
struct SummaryRow {
    id: i32,
    slug: String,
    title: String,
    excerpt: Option<String>,
    language: String,
    created_at: DateTime<Utc>,
    thumbnail_url: Option<String>,
    topic_name: Option<String>,
    author_name: Option<String>,
}

impl From<SummaryRow> for ArticleSummary {
    fn from(r: SummaryRow) -> Self {
        Self {
            id: r.id,
            slug: r.slug,
            title: r.title,
            excerpt: r.excerpt,
            language: r.language,
            created_at: r.created_at,
            thumbnail_url: r.thumbnail_url,
            topic_name: r.topic_name,
            author_name: r.author_name,
        }
    }
}

fn article_to_domain(m: article::Model) -> Article {
    Article {
        id: m.id,
        topic_id: m.topic_id,
        author_id: m.author_id,
        thumbnail_url: m.thumbnail_url,
        is_published: m.is_published,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn translation_to_domain(m: article_translation::Model) -> ArticleTranslation {
    ArticleTranslation {
        id: m.id,
        article_id: m.article_id,
        language: m.language,
        slug: m.slug,
        title: m.title,
        content: m.content,
        excerpt: m.excerpt,
        meta_description: m.meta_description,
        updated_at: m.updated_at,
    }
}

// ── ArticleRepository impl ──────────────────────────────────────

#[async_trait]
impl ArticleRepository for SeaOrmArticleRepository {
    async fn resolve_id(&self, key: &ArticleKey) -> DomainResult<Option<i32>> {
        match key {
            ArticleKey::Id(id) => {
                if article::Entity::find_by_id(*id).one(&self.db).await?.is_some() {
                    return Ok(Some(*id));
                }
                // all-digit slugs are legal too
                self.id_for_slug(&key.as_slug()).await
            }
            ArticleKey::Slug(slug) => self.id_for_slug(slug).await,
        }
    }

    async fn list_published(
        &self,
        language: &str,
        limit: u64,
        offset: u64,
    ) -> DomainResult<Page<ArticleSummary>> {
        let base = article_translation::Entity::find()
            .join(JoinType::InnerJoin, article_translation::Relation::Article.def())
            .filter(article::Column::IsPublished.eq(true))
            .filter(article_translation::Column::Language.eq(language));

        let total = base.clone().count(&self.db).await?;

        let rows = base
            .select_only()
            .column_as(article::Column::Id, "id")
            .column(article_translation::Column::Slug)
            .column(article_translation::Column::Title)
            .column(article_translation::Column::Excerpt)
            .column(article_translation::Column::Language)
            .column_as(article::Column::CreatedAt, "created_at")
            .column_as(article::Column::ThumbnailUrl, "thumbnail_url")
            .column_as(topic::Column::Name, "topic_name")
            .column_as(user::Column::Username, "author_name")
            .join(JoinType::LeftJoin, article::Relation::Topic.def())
            .join(JoinType::LeftJoin, article::Relation::Author.def())
            .order_by_desc(article::Column::CreatedAt)
            .order_by_desc(article::Column::Id)
            .limit(limit)
            .offset(offset)
            .into_model::<SummaryRow>()
            .all(&self.db)
            .await?;
        debug!("Listed {} of {} articles in {}", rows.len(), total, language);

        Ok(Page {
            items: rows.into_iter().map(ArticleSummary::from).collect(),
            limit,
            offset,
            total,
        })
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<ArticleDetail>> {
        let Some(translation) = article_translation::Entity::find()
            .filter(article_translation::Column::Slug.eq(slug))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let Some(article) = article::Entity::find_by_id(translation.article_id)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let topic_name = match article.topic_id {
            Some(id) => topic::Entity::find_by_id(id).one(&self.db).await?.map(|t| t.name),
            None => None,
        };
        let author_name = match article.author_id {
            Some(id) => user::Entity::find_by_id(id)
                .one(&self.db)
                .await?
                .map(|u| u.username),
            None => None,
        };

        let tags = tag::Entity::find()
            .join(JoinType::InnerJoin, tag::Relation::ArticleTags.def())
            .filter(article_tag::Column::ArticleId.eq(article.id))
            .order_by_asc(tag::Column::Name)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|t| TagRef {
                name: t.name,
                slug: t.slug,
            })
            .collect();

        Ok(Some(ArticleDetail {
            article: article_to_domain(article),
            translation: translation_to_domain(translation),
            topic_name,
            author_name,
            tags,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::repositories::test_support::{
        create_article, published, seed_author, seed_tag, test_db, NewArticle, NewTranslation,
    };
    use crate::infrastructure::database::repositories::SeaOrmTaxonomyRepository;
    use crate::domain::TaxonomyRepository;

    #[tokio::test]
    async fn translations_resolve_to_the_same_article() {
        let db = test_db().await;
        let id = create_article(&db, published("bai-viet", "the-post")).await;
        let repo = SeaOrmArticleRepository::new(db);

        let by_vi = repo.resolve_id(&ArticleKey::Slug("bai-viet".into())).await.unwrap();
        let by_en = repo.resolve_id(&ArticleKey::Slug("the-post".into())).await.unwrap();
        let by_id = repo.resolve_id(&ArticleKey::Id(id)).await.unwrap();

        assert_eq!(by_vi, Some(id));
        assert_eq!(by_en, Some(id));
        assert_eq!(by_id, Some(id));
        assert_eq!(
            repo.resolve_id(&ArticleKey::Slug("nope".into())).await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn unknown_numeric_key_falls_back_to_slug() {
        let db = test_db().await;
        let id = create_article(&db, published("2024", "year-2024")).await;
        assert_ne!(id, 2024);
        let repo = SeaOrmArticleRepository::new(db);

        let found = repo.resolve_id(&ArticleKey::Id(2024)).await.unwrap();
        assert_eq!(found, Some(id));
        assert_eq!(repo.resolve_id(&ArticleKey::Id(9999)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn listing_filters_language_and_drafts() {
        let db = test_db().await;
        let author = seed_author(&db, "lan").await;
        create_article(&db, published("mot", "one")).await;
        let mut second = published("hai", "two");
        second.author_id = Some(author);
        create_article(&db, second).await;
        create_article(
            &db,
            NewArticle {
                is_published: false,
                translations: vec![NewTranslation::new("vi", "nhap", "Draft")],
                ..Default::default()
            },
        )
        .await;
        let repo = SeaOrmArticleRepository::new(db);

        let page = repo.list_published("vi", 20, 0).await.unwrap();
        assert_eq!(page.total, 2);
        assert!(page.items.iter().all(|a| a.language == "vi"));
        // newest first
        assert_eq!(page.items[0].slug, "hai");
        assert_eq!(page.items[0].author_name.as_deref(), Some("lan"));
        assert_eq!(page.items[1].author_name, None);

        let page = repo.list_published("en", 1, 0).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert!(page.has_more());

        let page = repo.list_published("en", 1, 1).await.unwrap();
        assert_eq!(page.items[0].slug, "one");
        assert!(!page.has_more());
    }

    #[tokio::test]
    async fn detail_includes_topic_and_tags() {
        let db = test_db().await;
        let topic_id = SeaOrmTaxonomyRepository::new(db.clone())
            .create_topic("Rust", "rust", None)
            .await
            .unwrap();
        let async_tag = seed_tag(&db, "Async", "async").await;
        let db_tag = seed_tag(&db, "Database", "database").await;

        let mut new = published("tokio-vi", "tokio-en");
        new.topic_id = Some(topic_id);
        new.tag_ids = vec![db_tag, async_tag];
        create_article(&db, new).await;
        let repo = SeaOrmArticleRepository::new(db);

        let detail = repo.find_by_slug("tokio-en").await.unwrap().unwrap();
        assert_eq!(detail.translation.language, "en");
        assert_eq!(detail.topic_name.as_deref(), Some("Rust"));
        assert_eq!(detail.author_name, None);
        let tags: Vec<_> = detail.tags.iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(tags, ["async", "database"]);

        assert!(repo.find_by_slug("missing").await.unwrap().is_none());
    }
}
