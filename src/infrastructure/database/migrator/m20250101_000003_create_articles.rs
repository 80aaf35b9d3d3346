//! Create articles, article_translations and article_tags tables

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_users::Users;
use super::m20250101_000002_create_topics_and_tags::{Tags, Topics};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Articles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Articles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Articles::TopicId).integer().null())
                    .col(ColumnDef::new(Articles::AuthorId).integer().null())
                    .col(ColumnDef::new(Articles::ThumbnailUrl).string().null())
                    .col(
                        ColumnDef::new(Articles::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Articles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Articles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_articles_topic")
                            .from(Articles::Table, Articles::TopicId)
                            .to(Topics::Table, Topics::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_articles_author")
                            .from(Articles::Table, Articles::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_articles_published_created")
                    .table(Articles::Table)
                    .col(Articles::IsPublished)
                    .col(Articles::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ArticleTranslations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ArticleTranslations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ArticleTranslations::ArticleId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ArticleTranslations::Language)
                            .string_len(8)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ArticleTranslations::Slug)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ArticleTranslations::Title)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ArticleTranslations::Content).text().null())
                    .col(ColumnDef::new(ArticleTranslations::Excerpt).text().null())
                    .col(
                        ColumnDef::new(ArticleTranslations::MetaDescription)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ArticleTranslations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_translations_article")
                            .from(ArticleTranslations::Table, ArticleTranslations::ArticleId)
                            .to(Articles::Table, Articles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One translation per language
        manager
            .create_index(
                Index::create()
                    .name("idx_article_translations_article_language")
                    .table(ArticleTranslations::Table)
                    .col(ArticleTranslations::ArticleId)
                    .col(ArticleTranslations::Language)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ArticleTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ArticleTags::ArticleId).integer().not_null())
                    .col(ColumnDef::new(ArticleTags::TagId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(ArticleTags::ArticleId)
                            .col(ArticleTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_tags_article")
                            .from(ArticleTags::Table, ArticleTags::ArticleId)
                            .to(Articles::Table, Articles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_tags_tag")
                            .from(ArticleTags::Table, ArticleTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArticleTags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ArticleTranslations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Articles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Articles {
    Table,
    Id,
    TopicId,
    AuthorId,
    ThumbnailUrl,
    IsPublished,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub enum ArticleTranslations {
    Table,
    Id,
    ArticleId,
    Language,
    Slug,
    Title,
    Content,
    Excerpt,
    MetaDescription,
    UpdatedAt,
}

#[derive(Iden)]
pub enum ArticleTags {
    Table,
    ArticleId,
    TagId,
}
