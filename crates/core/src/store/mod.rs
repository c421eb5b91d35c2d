//! Persistence traits consumed by the services.
//!
//! The db crate implements these over SeaORM; [`memory`] provides in-process
//! implementations for tests and local runs. Each operation is expected to be
//! atomic on its own. No locking spans several calls.

pub mod memory;

use async_trait::async_trait;
use tally_shared::types::{StatementId, UserId};
use thiserror::Error;

use crate::statement::Statement;
use crate::user::User;

pub use memory::{InMemoryStatementStore, InMemoryUserStore};

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint was violated.
    #[error("duplicate record: {0}")]
    Duplicate(String),

    /// The backing store failed.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// User persistence.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by ID.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// Find a user by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user. Fails with [`StoreError::Duplicate`] if the email is taken.
    async fn create(&self, user: User) -> Result<User, StoreError>;
}

/// Append-only statement persistence.
#[async_trait]
pub trait StatementStore: Send + Sync {
    /// Append a statement and return the stored record.
    async fn append(&self, statement: Statement) -> Result<Statement, StoreError>;

    /// Find a statement by ID, regardless of owner.
    async fn find_by_id(&self, id: StatementId) -> Result<Option<Statement>, StoreError>;

    /// List a user's statements in creation order.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Statement>, StoreError>;
}
