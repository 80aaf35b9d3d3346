//! Reader comments: approved listing and guest submission

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::{create_comment, list_comments, CommentsState};
