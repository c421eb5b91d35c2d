//! Domain types for ledger statements.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{StatementId, UserId};

/// Longest description accepted, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// Operation kind of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// Money paid into the account.
    Deposit,
    /// Money taken out of the account.
    Withdraw,
}

impl OperationType {
    /// Convert to the wire/database string value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
        }
    }

    /// Parse from the wire/database string value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "deposit" => Some(Self::Deposit),
            "withdraw" => Some(Self::Withdraw),
            _ => None,
        }
    }

    /// Signed contribution of `amount` to a balance.
    #[must_use]
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            Self::Deposit => amount,
            Self::Withdraw => -amount,
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single immutable ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Statement ID.
    pub id: StatementId,
    /// Owning user.
    pub user_id: UserId,
    /// Deposit or withdraw.
    #[serde(rename = "type")]
    pub kind: OperationType,
    /// Non-negative amount, a JSON number on the wire.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    /// Free-form description.
    pub description: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Always equal to `created_at`; statements are never updated.
    pub updated_at: DateTime<Utc>,
}

impl Statement {
    /// Creates a new statement with a fresh time-ordered id and the current timestamp.
    #[must_use]
    pub fn new(
        user_id: UserId,
        kind: OperationType,
        amount: Decimal,
        description: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: StatementId::new(),
            user_id,
            kind,
            amount,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Signed contribution of this statement to the owner's balance.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.kind.signed(self.amount)
    }
}

/// Input for creating a statement.
#[derive(Debug, Clone)]
pub struct CreateStatementInput {
    /// Owning user.
    pub user_id: UserId,
    /// Deposit or withdraw.
    pub kind: OperationType,
    /// Amount (must be non-negative).
    pub amount: Decimal,
    /// Optional description.
    pub description: Option<String>,
}

/// Current balance together with the history it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Balance {
    /// Deposits minus withdrawals.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
    /// Statements in creation order.
    pub statement: Vec<Statement>,
}
