//! User error types.

use thiserror::Error;

use crate::auth::PasswordError;

/// Errors that can occur during user operations.
#[derive(Debug, Error)]
pub enum UserError {
    /// Authentication failed. Deliberately uniform: the message does not
    /// reveal whether the email or the secret was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration with an email that is already taken.
    #[error("a user with this email is already registered")]
    EmailTaken,

    /// Credential hashing or verification failed unexpectedly.
    #[error(transparent)]
    Credential(#[from] PasswordError),

    /// Opaque storage failure.
    #[error("database error: {0}")]
    Database(String),
}

impl UserError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::Credential(_) => "CREDENTIAL_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidCredentials => 401,
            Self::EmailTaken => 409,
            Self::Credential(_) | Self::Database(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            UserError::InvalidCredentials.error_code(),
            "INVALID_CREDENTIALS"
        );
        assert_eq!(UserError::EmailTaken.error_code(), "EMAIL_TAKEN");
        assert_eq!(
            UserError::Database("boom".to_string()).error_code(),
            "DATABASE_ERROR"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(UserError::InvalidCredentials.http_status_code(), 401);
        assert_eq!(UserError::EmailTaken.http_status_code(), 409);
        assert_eq!(UserError::Database("boom".to_string()).http_status_code(), 500);
    }

    #[test]
    fn test_invalid_credentials_message_is_uniform() {
        assert_eq!(UserError::InvalidCredentials.to_string(), "invalid credentials");
    }
}
