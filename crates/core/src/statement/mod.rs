//! Deposits, withdrawals, and derived balances.
//!
//! This module implements the statement ledger:
//! - Statement types (append-only deposit/withdraw records)
//! - Balance accumulation over a user's history
//! - Error types for statement operations
//! - Statement service (create, balance query, lookup)

pub mod balance;
pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use balance::compute_balance;
pub use error::StatementError;
pub use service::StatementService;
pub use types::{Balance, CreateStatementInput, MAX_DESCRIPTION_LEN, OperationType, Statement};
