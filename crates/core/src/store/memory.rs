//! In-memory store implementations.
//!
//! Every instance starts empty and owns its data, so each test (or request
//! context) can build its own pair of stores.

use async_trait::async_trait;
use tally_shared::types::{StatementId, UserId};
use tokio::sync::RwLock;

use super::{StatementStore, StoreError, UserStore};
use crate::statement::Statement;
use crate::user::User;

/// In-memory user store.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate(format!("email {}", user.email)));
        }
        users.push(user.clone());
        Ok(user)
    }
}

/// In-memory append-only statement store.
///
/// Insertion order is creation order.
#[derive(Debug, Default)]
pub struct InMemoryStatementStore {
    statements: RwLock<Vec<Statement>>,
}

impl InMemoryStatementStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of statements across all users.
    pub async fn len(&self) -> usize {
        self.statements.read().await.len()
    }

    /// Returns true if no statement has been appended.
    pub async fn is_empty(&self) -> bool {
        self.statements.read().await.is_empty()
    }
}

#[async_trait]
impl StatementStore for InMemoryStatementStore {
    async fn append(&self, statement: Statement) -> Result<Statement, StoreError> {
        self.statements.write().await.push(statement.clone());
        Ok(statement)
    }

    async fn find_by_id(&self, id: StatementId) -> Result<Option<Statement>, StoreError> {
        let statements = self.statements.read().await;
        Ok(statements.iter().find(|s| s.id == id).cloned())
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Statement>, StoreError> {
        let statements = self.statements.read().await;
        Ok(statements
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }
}
