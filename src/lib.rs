//! # Blog Service
//!
//! Backend of a multilingual blog: published articles with per-language
//! translations, topics and tags, guest comments, and a rate-limited
//! article view counter.
//!
//! ## Architecture
//!
//! - **domain**: entities, value types and repository traits
//! - **application**: view counting service and the mark sweeper
//! - **infrastructure**: SeaORM database, migrations, in-memory view store
//! - **interfaces**: axum REST API with Swagger documentation
//! - **server**: process lifecycle (startup, background tasks, shutdown)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};
pub use infrastructure::{init_database, DatabaseConfig};
pub use interfaces::http::create_api_router;
pub use server::{init_tracing, ServerHandle, ServerOptions};
