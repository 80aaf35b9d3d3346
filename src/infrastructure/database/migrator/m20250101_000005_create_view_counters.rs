//! Create post_views and rate_limits tables
//!
//! Neither table references `articles` with a foreign key: counters are
//! never deleted, even if the article goes away.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostViews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PostViews::ArticleId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PostViews::Count)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RateLimits::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RateLimits::ClientKey)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(ColumnDef::new(RateLimits::ArticleId).integer().not_null())
                    .col(
                        ColumnDef::new(RateLimits::LastViewed)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(RateLimits::ClientKey)
                            .col(RateLimits::ArticleId),
                    )
                    .to_owned(),
            )
            .await?;

        // The sweeper deletes by age
        manager
            .create_index(
                Index::create()
                    .name("idx_rate_limits_last_viewed")
                    .table(RateLimits::Table)
                    .col(RateLimits::LastViewed)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RateLimits::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PostViews::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum PostViews {
    Table,
    ArticleId,
    Count,
}

#[derive(Iden)]
pub enum RateLimits {
    Table,
    ClientKey,
    ArticleId,
    LastViewed,
}
