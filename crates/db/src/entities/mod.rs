//! `SeaORM` entity definitions.

pub mod sea_orm_active_enums;
pub mod statements;
pub mod users;
