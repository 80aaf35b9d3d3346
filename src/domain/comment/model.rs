//! Comment domain entity

use chrono::{DateTime, Utc};

/// Minimum length of a comment body after trimming.
pub const MIN_COMMENT_LEN: usize = 3;

/// An approved comment as shown under an article
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: i32,
    pub article_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub guest_name: Option<String>,
    /// Set when the comment was left by a registered user
    pub username: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: i32,
    pub content: String,
    pub guest_name: String,
    pub guest_email: Option<String>,
}

impl NewComment {
    /// Trims every field; a blank e-mail becomes `None`.
    pub fn new(
        article_id: i32,
        content: &str,
        guest_name: &str,
        guest_email: Option<&str>,
    ) -> Self {
        Self {
            article_id,
            content: content.trim().to_string(),
            guest_name: guest_name.trim().to_string(),
            guest_email: guest_email
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(String::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_comment_trims_input() {
        let c = NewComment::new(7, "  nice post  ", " Lan ", Some("  "));
        assert_eq!(c.content, "nice post");
        assert_eq!(c.guest_name, "Lan");
        assert_eq!(c.guest_email, None);
        assert_eq!(c.article_id, 7);
    }
}
