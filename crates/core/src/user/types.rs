//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tally_shared::types::UserId;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Unique email.
    pub email: String,
    /// Argon2id PHC hash; never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user record with a fresh id and the current timestamp.
    #[must_use]
    pub fn new(name: &str, email: &str, password_hash: &str) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Input for registering a user.
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    /// Display name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Input for authenticating a user.
#[derive(Debug, Clone)]
pub struct AuthenticateInput {
    /// Email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// A user with a freshly issued access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The authenticated user.
    pub user: User,
    /// Bearer access token.
    pub token: String,
}
