/// Default number of items on a list page.
pub const DEFAULT_PAGE_LIMIT: u64 = 20;
/// Upper bound on a list page.
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Slugs are ASCII letters, digits, hyphens and underscores.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Clamp `limit` to 1..=100 (default 20) and `offset` to >= 0.
pub fn clamp_page(limit: Option<i64>, offset: Option<i64>) -> (u64, u64) {
    let limit = match limit {
        Some(l) if l > 0 => (l as u64).min(MAX_PAGE_LIMIT),
        _ => DEFAULT_PAGE_LIMIT,
    };
    let offset = offset.unwrap_or(0).max(0) as u64;
    (limit, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_accepts_mixed_case_digits_and_separators() {
        assert!(is_valid_slug("my-post"));
        assert!(is_valid_slug("Hello_World-2024"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("../etc/passwd"));
        assert!(!is_valid_slug("with space"));
        assert!(!is_valid_slug("bài-viết"));
    }

    #[test]
    fn window_is_clamped() {
        assert_eq!(clamp_page(None, None), (20, 0));
        assert_eq!(clamp_page(Some(500), Some(-3)), (100, 0));
        assert_eq!(clamp_page(Some(0), Some(40)), (20, 40));
        assert_eq!(clamp_page(Some(5), Some(10)), (5, 10));
    }
}
