pub mod articles;
pub mod comments;
pub mod health;
pub mod metrics;
pub mod request_id;
pub mod taxonomy;
pub mod views;
