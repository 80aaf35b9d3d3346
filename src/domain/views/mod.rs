//! View counting aggregate
//!
//! Per-article counters plus per-(client, article) rate-limit marks.

pub mod model;
pub mod repository;

pub use model::{ArticleKey, ClientId, ViewOutcome, ViewWindow, UNKNOWN_CLIENT};
pub use repository::ViewRepository;
