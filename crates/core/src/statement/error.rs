//! Statement error types.

use rust_decimal::Decimal;
use tally_shared::AppError;
use tally_shared::types::{StatementId, UserId};
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during statement operations.
#[derive(Debug, Error)]
pub enum StatementError {
    /// The referenced user does not exist.
    #[error("User not found")]
    UserNotFound(UserId),

    /// The statement does not exist for this user.
    #[error("Statement not found")]
    StatementNotFound(StatementId),

    /// Withdrawal exceeds the current balance.
    #[error("Insufficient funds")]
    InsufficientFunds {
        /// Balance at the time of the check.
        balance: Decimal,
        /// Requested withdrawal amount.
        requested: Decimal,
    },

    /// Statement amount cannot be negative.
    #[error("Amount cannot be negative")]
    NegativeAmount,

    /// A deposit would push the balance past the representable range.
    #[error("Amount too large")]
    AmountTooLarge,

    /// Description exceeds the stored column length.
    #[error("Description must be at most {max} characters")]
    DescriptionTooLong {
        /// Maximum length in characters.
        max: usize,
    },

    /// The stored history no longer sums to a representable balance.
    #[error("balance overflow for user {0}")]
    BalanceOverflow(UserId),

    /// Store operation failed.
    #[error("repository error: {0}")]
    Repository(String),
}

impl StatementError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::StatementNotFound(_) => "STATEMENT_NOT_FOUND",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::AmountTooLarge => "AMOUNT_TOO_LARGE",
            Self::DescriptionTooLong { .. } => "VALIDATION_ERROR",
            Self::BalanceOverflow(_) => "INTERNAL_ERROR",
            Self::Repository(_) => "DATABASE_ERROR",
        }
    }
}

impl From<StoreError> for StatementError {
    fn from(err: StoreError) -> Self {
        Self::Repository(err.to_string())
    }
}

impl From<StatementError> for AppError {
    fn from(err: StatementError) -> Self {
        match err {
            StatementError::UserNotFound(_) | StatementError::StatementNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            StatementError::InsufficientFunds { .. } => Self::BusinessRule(err.to_string()),
            StatementError::NegativeAmount
            | StatementError::AmountTooLarge
            | StatementError::DescriptionTooLong { .. } => Self::Validation(err.to_string()),
            StatementError::BalanceOverflow(_) => Self::Internal(err.to_string()),
            StatementError::Repository(msg) => Self::Database(msg),
        }
    }
}
