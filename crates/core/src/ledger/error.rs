//! Ledger error types.

use thiserror::Error;

use super::validation::ValidationError;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A draft failed business rule validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Update or delete was attempted on an entry that was never persisted.
    #[error("entry has not been persisted")]
    NotPersisted,

    /// Opaque storage failure. The ledger does not interpret it.
    #[error("database error: {0}")]
    Database(String),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotPersisted => "ENTRY_NOT_PERSISTED",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::NotPersisted => 400,
            Self::Database(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            LedgerError::Validation(ValidationError::Month).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(LedgerError::NotPersisted.error_code(), "ENTRY_NOT_PERSISTED");
        assert_eq!(
            LedgerError::Database("boom".to_string()).error_code(),
            "DATABASE_ERROR"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(
            LedgerError::Validation(ValidationError::Amount).http_status_code(),
            400
        );
        assert_eq!(LedgerError::NotPersisted.http_status_code(), 400);
        assert_eq!(
            LedgerError::Database("boom".to_string()).http_status_code(),
            500
        );
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = LedgerError::from(ValidationError::Description);
        assert_eq!(err.to_string(), "invalid description");
    }
}
