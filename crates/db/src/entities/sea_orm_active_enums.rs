//! `SeaORM` active enums mapped to Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use tally_core::statement::OperationType;

/// Postgres enum `statements_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "statements_type")]
pub enum StatementsType {
    /// Deposit.
    #[sea_orm(string_value = "deposit")]
    Deposit,
    /// Withdraw.
    #[sea_orm(string_value = "withdraw")]
    Withdraw,
}

impl From<OperationType> for StatementsType {
    fn from(kind: OperationType) -> Self {
        match kind {
            OperationType::Deposit => Self::Deposit,
            OperationType::Withdraw => Self::Withdraw,
        }
    }
}

impl From<StatementsType> for OperationType {
    fn from(kind: StatementsType) -> Self {
        match kind {
            StatementsType::Deposit => Self::Deposit,
            StatementsType::Withdraw => Self::Withdraw,
        }
    }
}
