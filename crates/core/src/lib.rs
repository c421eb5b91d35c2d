//! Core business logic for Tally.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and balance calculations live here.
//!
//! # Modules
//!
//! - `auth` - Password hashing
//! - `statement` - Deposits, withdrawals, and derived balances
//! - `store` - Persistence traits and in-memory implementations
//! - `user` - Registration, authentication, and profiles

pub mod auth;
pub mod statement;
pub mod store;
pub mod user;

pub use statement::{
    Balance, CreateStatementInput, OperationType, Statement, StatementError, StatementService,
};
pub use store::{StatementStore, StoreError, UserStore};
pub use user::{User, UserError, UserService};
