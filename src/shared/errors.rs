use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Malformed or missing input
    #[error("Validation: {0}")]
    Validation(String),

    /// A unique key is already taken
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The backing store failed or could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            field,
            value: value.into(),
        }
    }

    /// Whether this error is likely transient (e.g. SQLite busy)
    /// and the operation may succeed if retried.
    pub fn is_transient(&self) -> bool {
        match self {
            DomainError::Unavailable(msg) => {
                let msg = msg.to_lowercase();
                msg.contains("locked") || msg.contains("busy") || msg.contains("timed out")
            }
            _ => false,
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl From<InfraError> for DomainError {
    fn from(e: InfraError) -> Self {
        DomainError::Unavailable(e.to_string())
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        InfraError::Database(e).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_database_is_transient() {
        let err = DomainError::Unavailable("Database error: database is locked".to_string());
        assert!(err.is_transient());
    }

    #[test]
    fn not_found_is_permanent() {
        let err = DomainError::not_found("Article", "slug", "missing");
        assert!(!err.is_transient());
        assert_eq!(err.to_string(), "Not found: Article with slug=missing");
        assert!(!DomainError::Conflict("taken".to_string()).is_transient());
    }

    #[test]
    fn db_errors_map_to_unavailable() {
        let err: DomainError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, DomainError::Unavailable(_)));
    }
}
