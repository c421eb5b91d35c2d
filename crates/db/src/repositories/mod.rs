//! Repository abstractions for data access.
//!
//! Repositories implement the core store traits over `SeaORM`, hiding the
//! entity models from the services.

pub mod statement;
pub mod user;

pub use statement::StatementRepository;
pub use user::UserRepository;

use sea_orm::{DbErr, SqlErr};
use tally_core::StoreError;

/// Maps a database error to a store error, surfacing unique violations.
pub(crate) fn store_error(err: DbErr) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => StoreError::Duplicate(detail),
        _ => StoreError::Backend(err.to_string()),
    }
}
