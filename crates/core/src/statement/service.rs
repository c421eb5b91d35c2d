//! Statement service: create, balance query, and lookup.
//!
//! The service is stateless; every call reads the current history from the
//! stores and makes a single decision. Nothing guards the window between the
//! balance check and the append of a withdrawal, so two concurrent
//! withdrawals for the same user can both pass the check.

use std::sync::Arc;

use rust_decimal::Decimal;
use tally_shared::types::{StatementId, UserId};

use super::balance::compute_balance;
use super::error::StatementError;
use super::types::{
    Balance, CreateStatementInput, MAX_DESCRIPTION_LEN, OperationType, Statement,
};
use crate::store::{StatementStore, UserStore};

/// Statement service over injectable user and statement stores.
#[derive(Clone)]
pub struct StatementService {
    users: Arc<dyn UserStore>,
    statements: Arc<dyn StatementStore>,
}

impl std::fmt::Debug for StatementService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatementService").finish_non_exhaustive()
    }
}

impl StatementService {
    /// Create a new statement service.
    #[must_use]
    pub fn new(users: Arc<dyn UserStore>, statements: Arc<dyn StatementStore>) -> Self {
        Self { users, statements }
    }

    /// Validate and append a new statement.
    ///
    /// Steps:
    /// 1. The user must exist
    /// 2. The amount must be non-negative and the description fit its column
    /// 3. A withdrawal must not exceed the balance derived from the user's history;
    ///    a deposit must keep that balance representable
    /// 4. The statement gets a fresh id and timestamp and is appended
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound`, `NegativeAmount`, `DescriptionTooLong`,
    /// `InsufficientFunds`, `AmountTooLarge`, or `Repository` if a store call
    /// fails. Nothing is written on error.
    pub async fn create_statement(
        &self,
        input: CreateStatementInput,
    ) -> Result<Statement, StatementError> {
        self.ensure_user_exists(input.user_id).await?;

        if input.amount < Decimal::ZERO {
            return Err(StatementError::NegativeAmount);
        }
        if input
            .description
            .as_deref()
            .is_some_and(|d| d.chars().count() > MAX_DESCRIPTION_LEN)
        {
            return Err(StatementError::DescriptionTooLong {
                max: MAX_DESCRIPTION_LEN,
            });
        }

        let history = self.statements.list_by_user(input.user_id).await?;
        let balance = compute_balance(&history)
            .ok_or(StatementError::BalanceOverflow(input.user_id))?;

        match input.kind {
            OperationType::Withdraw if input.amount > balance => {
                return Err(StatementError::InsufficientFunds {
                    balance,
                    requested: input.amount,
                });
            }
            OperationType::Deposit if balance.checked_add(input.amount).is_none() => {
                return Err(StatementError::AmountTooLarge);
            }
            _ => {}
        }

        let statement = Statement::new(input.user_id, input.kind, input.amount, input.description);
        Ok(self.statements.append(statement).await?)
    }

    /// Current balance and full history for a user.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if the user does not exist.
    pub async fn get_balance(&self, user_id: UserId) -> Result<Balance, StatementError> {
        self.ensure_user_exists(user_id).await?;

        let statement = self.statements.list_by_user(user_id).await?;
        let balance =
            compute_balance(&statement).ok_or(StatementError::BalanceOverflow(user_id))?;

        Ok(Balance { balance, statement })
    }

    /// A single statement, scoped to its owner.
    ///
    /// A statement owned by someone else is reported exactly like a missing one.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if the user does not exist, `StatementNotFound`
    /// if the statement is missing or belongs to another user.
    pub async fn get_statement_operation(
        &self,
        user_id: UserId,
        statement_id: StatementId,
    ) -> Result<Statement, StatementError> {
        self.ensure_user_exists(user_id).await?;

        match self.statements.find_by_id(statement_id).await? {
            Some(statement) if statement.user_id == user_id => Ok(statement),
            _ => Err(StatementError::StatementNotFound(statement_id)),
        }
    }

    async fn ensure_user_exists(&self, user_id: UserId) -> Result<(), StatementError> {
        match self.users.find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(StatementError::UserNotFound(user_id)),
        }
    }
}
