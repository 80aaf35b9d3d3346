//! Topic and tag catalog

pub mod dto;
pub mod handlers;

pub use dto::{CreateTopicRequest, CreateTopicResponse, TagResponse, TopicResponse};
pub use handlers::{create_topic, list_tags, list_topics, TaxonomyState};
