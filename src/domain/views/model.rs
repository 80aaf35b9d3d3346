//! View counter domain types

use sha2::{Digest, Sha256};

use crate::shared::{is_valid_slug, DomainError, DomainResult};

/// Identifier used when the transport cannot tell who the client is.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Who is viewing. Usually the caller's IP as reported by the edge proxy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientId(String);

impl ClientId {
    /// Blank or absent values collapse to the `"unknown"` sentinel.
    pub fn new(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(value) if !value.is_empty() => Self(value.to_string()),
            _ => Self::unknown(),
        }
    }

    pub fn unknown() -> Self {
        Self(UNKNOWN_CLIENT.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key under which rate-limit marks for this client are stored.
    pub fn storage_key(&self, hashed: bool) -> String {
        if hashed {
            hex::encode(Sha256::digest(self.0.as_bytes()))
        } else {
            self.0.clone()
        }
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the caller named the article: numeric id or a translation slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleKey {
    Id(i32),
    Slug(String),
}

impl ArticleKey {
    pub fn parse(raw: Option<&str>) -> DomainResult<Self> {
        let raw = raw.map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Err(DomainError::Validation("Missing key param".to_string()));
        }
        if let Ok(id) = raw.parse::<i32>() {
            if id > 0 {
                return Ok(Self::Id(id));
            }
        }
        if !is_valid_slug(raw) {
            return Err(DomainError::Validation("Invalid slug format".to_string()));
        }
        Ok(Self::Slug(raw.to_string()))
    }

    pub fn as_slug(&self) -> String {
        match self {
            Self::Id(id) => id.to_string(),
            Self::Slug(slug) => slug.clone(),
        }
    }
}

impl std::fmt::Display for ArticleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{}", id),
            Self::Slug(slug) => f.write_str(slug),
        }
    }
}

/// Rolling dedup window, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewWindow {
    secs: i64,
}

impl ViewWindow {
    pub const DEFAULT: Self = Self {
        secs: crate::config::DEFAULT_VIEW_WINDOW_SECS as i64,
    };

    pub fn from_secs(secs: u64) -> Self {
        Self {
            secs: secs.clamp(1, i64::MAX as u64) as i64,
        }
    }

    pub fn secs(&self) -> i64 {
        self.secs
    }

    /// Marks stamped strictly before this instant no longer block a view.
    pub fn cutoff(&self, now: i64) -> i64 {
        now.saturating_sub(self.secs)
    }

    /// A view is countable when there is no mark, or the mark is older than the window.
    pub fn is_countable(&self, last_viewed: Option<i64>, now: i64) -> bool {
        match last_viewed {
            None => true,
            Some(ts) => ts < self.cutoff(now),
        }
    }
}

impl Default for ViewWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Result of one `record` call against a view store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOutcome {
    /// Total after the call
    pub count: u64,
    /// Whether this call incremented the counter
    pub counted: bool,
}
