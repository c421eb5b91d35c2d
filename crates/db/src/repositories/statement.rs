//! Statement repository for the append-only ledger table.
//!
//! Rows are only ever inserted. Listing orders by `created_at` and then by
//! the time-ordered id, so statements created in the same instant keep
//! their insertion order.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tally_core::statement::Statement;
use tally_core::store::{StatementStore, StoreError};
use tally_shared::types::{StatementId, UserId};
use tracing::debug;

use super::store_error;
use crate::entities::statements;

/// Statement repository backed by the `statements` table.
#[derive(Debug, Clone)]
pub struct StatementRepository {
    db: DatabaseConnection,
}

impl StatementRepository {
    /// Creates a new statement repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StatementStore for StatementRepository {
    async fn append(&self, statement: Statement) -> Result<Statement, StoreError> {
        let active = statements::ActiveModel {
            id: Set(statement.id.into_inner()),
            user_id: Set(statement.user_id.into_inner()),
            description: Set(statement.description),
            amount: Set(statement.amount),
            kind: Set(statement.kind.into()),
            created_at: Set(statement.created_at.into()),
            updated_at: Set(statement.updated_at.into()),
        };

        let model = active.insert(&self.db).await.map_err(store_error)?;
        debug!(statement_id = %model.id, user_id = %model.user_id, "Statement appended");

        Ok(to_domain(model))
    }

    async fn find_by_id(&self, id: StatementId) -> Result<Option<Statement>, StoreError> {
        let model = statements::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(store_error)?;

        Ok(model.map(to_domain))
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Statement>, StoreError> {
        let models = statements::Entity::find()
            .filter(statements::Column::UserId.eq(user_id.into_inner()))
            .order_by_asc(statements::Column::CreatedAt)
            .order_by_asc(statements::Column::Id)
            .all(&self.db)
            .await
            .map_err(store_error)?;

        Ok(models.into_iter().map(to_domain).collect())
    }
}

/// Converts a `statements` row into the domain statement.
#[must_use]
pub fn to_domain(model: statements::Model) -> Statement {
    Statement {
        id: StatementId::from_uuid(model.id),
        user_id: UserId::from_uuid(model.user_id),
        kind: model.kind.into(),
        amount: model.amount,
        description: model.description,
        created_at: model.created_at.to_utc(),
        updated_at: model.updated_at.to_utc(),
    }
}
