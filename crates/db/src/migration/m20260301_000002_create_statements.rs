//! Statements table: the append-only ledger.
//!
//! There is no balance column; balances are always derived from this table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(STATEMENTS_TYPE_SQL).await?;
        db.execute_unprepared(STATEMENTS_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS statements CASCADE; DROP TYPE IF EXISTS statements_type;",
        )
        .await?;
        Ok(())
    }
}

const STATEMENTS_TYPE_SQL: &str = r"
CREATE TYPE statements_type AS ENUM ('deposit', 'withdraw');
";

const STATEMENTS_SQL: &str = r"
CREATE TABLE statements (
    id UUID PRIMARY KEY,
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    description VARCHAR(255),
    amount NUMERIC NOT NULL,
    type statements_type NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_statements_amount_non_negative CHECK (amount >= 0)
);

-- History reads are always per user, oldest first
CREATE INDEX idx_statements_user_created ON statements(user_id, created_at, id);
";
