//! View counter endpoints: `/increment` and its `/` alias

pub mod dto;
pub mod handlers;

pub use dto::{CountResponse, ViewKeyQuery};
pub use handlers::{get_view_count, record_view, ViewsState};
