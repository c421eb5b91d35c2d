//! User error types.

use tally_shared::types::UserId;
use tally_shared::{AppError, JwtError};
use thiserror::Error;

use crate::auth::PasswordError;
use crate::store::StoreError;

/// Errors that can occur during user operations.
#[derive(Debug, Error)]
pub enum UserError {
    /// A required field is empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A field exceeds the stored column length.
    #[error("{field} must be at most {max} characters")]
    FieldTooLong {
        /// Field name.
        field: &'static str,
        /// Maximum length in characters.
        max: usize,
    },

    /// Email is already registered.
    #[error("User already exists")]
    EmailAlreadyExists(String),

    /// Unknown email or wrong password.
    #[error("Incorrect email or password")]
    IncorrectEmailOrPassword,

    /// The referenced user does not exist.
    #[error("User not found")]
    UserNotFound(UserId),

    /// Password hashing or verification failed.
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// Token issuance failed.
    #[error(transparent)]
    Token(#[from] JwtError),

    /// Store operation failed.
    #[error("repository error: {0}")]
    Repository(String),
}

impl UserError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField(_) | Self::FieldTooLong { .. } => "VALIDATION_ERROR",
            Self::EmailAlreadyExists(_) => "USER_ALREADY_EXISTS",
            Self::IncorrectEmailOrPassword => "INCORRECT_EMAIL_OR_PASSWORD",
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::Password(_) | Self::Token(_) => "INTERNAL_ERROR",
            Self::Repository(_) => "DATABASE_ERROR",
        }
    }
}

impl From<StoreError> for UserError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(what) => Self::EmailAlreadyExists(what),
            StoreError::Backend(msg) => Self::Repository(msg),
        }
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::MissingField(_)
            | UserError::FieldTooLong { .. }
            | UserError::EmailAlreadyExists(_) => {
                Self::Validation(err.to_string())
            }
            UserError::IncorrectEmailOrPassword => Self::Unauthorized(err.to_string()),
            UserError::UserNotFound(_) => Self::NotFound(err.to_string()),
            UserError::Password(_) | UserError::Token(_) => Self::Internal(err.to_string()),
            UserError::Repository(msg) => Self::Database(msg),
        }
    }
}
