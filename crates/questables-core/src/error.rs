//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

/// Top-level domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A referenced record was not found.
    #[error("record not found: {0}")]
    NotFound(Uuid),

    /// A validation error outside the objective payload itself.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_includes_id() {
        let id = Uuid::new_v4();
        assert_eq!(
            DomainError::NotFound(id).to_string(),
            format!("record not found: {id}")
        );
    }

    #[test]
    fn test_validation_display_is_prefixed() {
        let err = DomainError::Validation("too deep".into());
        assert_eq!(err.to_string(), "validation error: too deep");
    }
}
