//! SeaORM implementation of ViewRepository
//!
//! Recording a view is one transaction of three statements:
//!
//! 1. conditional mark upsert: insert the (client, article) mark, or move an
//!    existing one to `now` only when it is older than the window. One
//!    affected row means the view is countable.
//! 2. counter upsert `count = count + 1`, only when step 1 touched a row.
//! 3. read back the total.
//!
//! Both writes are single statements evaluated by the database, so two
//! requests never read the same stale value and write it back.

use async_trait::async_trait;
use log::debug;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, TransactionTrait,
};

use crate::domain::views::{ViewOutcome, ViewRepository, ViewWindow};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{post_view, rate_limit};

pub struct SeaOrmViewRepository {
    db: DatabaseConnection,
}

impl SeaOrmViewRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_count(raw: i64) -> u64 {
    raw.max(0) as u64
}

#[async_trait]
impl ViewRepository for SeaOrmViewRepository {
    async fn record(
        &self,
        client_key: &str,
        article_id: i32,
        now: i64,
        window: ViewWindow,
    ) -> DomainResult<ViewOutcome> {
        let txn = self.db.begin().await?;

        let mark = rate_limit::ActiveModel {
            client_key: Set(client_key.to_string()),
            article_id: Set(article_id),
            last_viewed: Set(now),
        };
        let marked = rate_limit::Entity::insert(mark)
            .on_conflict(
                OnConflict::columns([rate_limit::Column::ClientKey, rate_limit::Column::ArticleId])
                    .update_column(rate_limit::Column::LastViewed)
                    .action_and_where(
                        Expr::col((rate_limit::Entity, rate_limit::Column::LastViewed))
                            .lt(window.cutoff(now)),
                    )
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
        let counted = marked > 0;

        if counted {
            let counter = post_view::ActiveModel {
                article_id: Set(article_id),
                count: Set(1),
            };
            post_view::Entity::insert(counter)
                .on_conflict(
                    OnConflict::column(post_view::Column::ArticleId)
                        .value(
                            post_view::Column::Count,
                            Expr::col((post_view::Entity, post_view::Column::Count)).add(1),
                        )
                        .to_owned(),
                )
                .exec_without_returning(&txn)
                .await?;
        }

        let count = post_view::Entity::find_by_id(article_id)
            .one(&txn)
            .await?
            .map(|m| to_count(m.count))
            .unwrap_or(0);

        txn.commit().await?;

        debug!(
            "View of article {} by {}: counted={}, total={}",
            article_id, client_key, counted, count
        );
        Ok(ViewOutcome { count, counted })
    }

    async fn count(&self, article_id: i32) -> DomainResult<u64> {
        let model = post_view::Entity::find_by_id(article_id).one(&self.db).await?;
        Ok(model.map(|m| to_count(m.count)).unwrap_or(0))
    }

    async fn purge_marks_before(&self, cutoff: i64) -> DomainResult<u64> {
        let res = rate_limit::Entity::delete_many()
            .filter(rate_limit::Column::LastViewed.lt(cutoff))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::repositories::test_support::{seed_article, test_db};

    const W: ViewWindow = ViewWindow::DEFAULT;

    #[tokio::test]
    async fn first_view_creates_counter() {
        let db = test_db().await;
        let id = seed_article(&db, "my-post").await;
        let repo = SeaOrmViewRepository::new(db);

        assert_eq!(repo.count(id).await.unwrap(), 0);
        let out = repo.record("a", id, 1_000, W).await.unwrap();
        assert_eq!(out, ViewOutcome { count: 1, counted: true });
        assert_eq!(repo.count(id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn repeat_inside_window_is_not_counted() {
        let db = test_db().await;
        let id = seed_article(&db, "my-post").await;
        let repo = SeaOrmViewRepository::new(db);

        for offset in [0, 1, 150, 299, 300] {
            let out = repo.record("a", id, 1_000 + offset, W).await.unwrap();
            assert_eq!(out.count, 1, "offset {}", offset);
        }

        let out = repo.record("a", id, 1_301, W).await.unwrap();
        assert_eq!(out, ViewOutcome { count: 2, counted: true });
    }

    #[tokio::test]
    async fn blocked_view_does_not_extend_the_window() {
        let db = test_db().await;
        let id = seed_article(&db, "my-post").await;
        let repo = SeaOrmViewRepository::new(db);

        repo.record("a", id, 1_000, W).await.unwrap();
        repo.record("a", id, 1_200, W).await.unwrap();
        // measured from the counted view at 1000, not the blocked one at 1200
        let out = repo.record("a", id, 1_301, W).await.unwrap();
        assert!(out.counted);
        assert_eq!(out.count, 2);
    }

    #[tokio::test]
    async fn distinct_clients_each_count() {
        let db = test_db().await;
        let id = seed_article(&db, "my-post").await;
        let repo = SeaOrmViewRepository::new(db);

        repo.record("a", id, 1_000, W).await.unwrap();
        let out = repo.record("b", id, 1_001, W).await.unwrap();
        assert_eq!(out.count, 2);
    }

    #[tokio::test]
    async fn marks_are_per_article() {
        let db = test_db().await;
        let first = seed_article(&db, "first").await;
        let second = seed_article(&db, "second").await;
        let repo = SeaOrmViewRepository::new(db);

        repo.record("a", first, 1_000, W).await.unwrap();
        let out = repo.record("a", second, 1_000, W).await.unwrap();
        assert!(out.counted);
        assert_eq!(repo.count(first).await.unwrap(), 1);
        assert_eq!(repo.count(second).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn concurrent_views_lose_no_increments() {
        let db = test_db().await;
        let id = seed_article(&db, "busy").await;
        let repo = SeaOrmViewRepository::new(db);

        let clients: Vec<String> = (0..25).map(|i| format!("client-{}", i)).collect();
        let calls = clients.iter().map(|c| repo.record(c, id, 5_000, W));
        let results = futures_util::future::join_all(calls).await;

        assert!(results.iter().all(|r| r.as_ref().map(|o| o.counted).unwrap_or(false)));
        assert_eq!(repo.count(id).await.unwrap(), 25);
    }

    #[tokio::test]
    async fn purge_removes_only_expired_marks() {
        let db = test_db().await;
        let id = seed_article(&db, "my-post").await;
        let repo = SeaOrmViewRepository::new(db);

        repo.record("old", id, 100, W).await.unwrap();
        repo.record("fresh", id, 900, W).await.unwrap();

        assert_eq!(repo.purge_marks_before(500).await.unwrap(), 1);
        assert_eq!(repo.purge_marks_before(500).await.unwrap(), 0);
        // counters survive purging
        assert_eq!(repo.count(id).await.unwrap(), 2);
    }
}
