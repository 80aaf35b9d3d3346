//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_users;
mod m20250101_000002_create_topics_and_tags;
mod m20250101_000003_create_articles;
mod m20250101_000004_create_comments;
mod m20250101_000005_create_view_counters;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users::Migration),
            Box::new(m20250101_000002_create_topics_and_tags::Migration),
            Box::new(m20250101_000003_create_articles::Migration),
            Box::new(m20250101_000004_create_comments::Migration),
            Box::new(m20250101_000005_create_view_counters::Migration),
        ]
    }
}
