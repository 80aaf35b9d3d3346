//! Reader comments

pub mod model;
pub mod repository;

pub use model::{Comment, NewComment, MIN_COMMENT_LEN};
pub use repository::CommentRepository;
