//! User service: registration, authentication, and profile lookup.

use std::sync::Arc;

use tally_shared::JwtService;
use tally_shared::types::UserId;

use super::error::UserError;
use super::types::{AuthenticateInput, AuthenticatedUser, CreateUserInput, User};
use crate::auth::{hash_password, verify_password};
use crate::store::UserStore;

/// Longest name or email accepted, in characters.
pub const MAX_FIELD_LEN: usize = 255;

/// User service over an injectable user store.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    jwt: Arc<JwtService>,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService")
            .field("jwt", &self.jwt)
            .finish_non_exhaustive()
    }
}

impl UserService {
    /// Create a new user service.
    #[must_use]
    pub fn new(users: Arc<dyn UserStore>, jwt: Arc<JwtService>) -> Self {
        Self { users, jwt }
    }

    /// Register a new user with an Argon2id-hashed password.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` for empty inputs, `EmailAlreadyExists` if the
    /// email is taken (including a concurrent insert losing the unique race).
    pub async fn create_user(&self, input: CreateUserInput) -> Result<User, UserError> {
        let name = required("name", &input.name)?;
        let email = required("email", &input.email)?;
        if input.password.is_empty() {
            return Err(UserError::MissingField("password"));
        }

        if self.users.find_by_email(email).await?.is_some() {
            return Err(UserError::EmailAlreadyExists(email.to_string()));
        }

        let password_hash = hash_password(&input.password)?;
        let user = User::new(name, email, &password_hash);

        Ok(self.users.create(user).await?)
    }

    /// Check credentials and issue an access token.
    ///
    /// Unknown emails and wrong passwords fail identically.
    ///
    /// # Errors
    ///
    /// Returns `IncorrectEmailOrPassword` on bad credentials.
    pub async fn authenticate(
        &self,
        input: AuthenticateInput,
    ) -> Result<AuthenticatedUser, UserError> {
        let Some(user) = self.users.find_by_email(input.email.trim()).await? else {
            return Err(UserError::IncorrectEmailOrPassword);
        };

        if !verify_password(&input.password, &user.password_hash)? {
            return Err(UserError::IncorrectEmailOrPassword);
        }

        let token = self.jwt.generate_access_token(user.id.into_inner())?;

        Ok(AuthenticatedUser { user, token })
    }

    /// Profile of an existing user.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if the user does not exist.
    pub async fn show_profile(&self, user_id: UserId) -> Result<User, UserError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::UserNotFound(user_id))
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, UserError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(UserError::MissingField(field));
    }
    if trimmed.chars().count() > MAX_FIELD_LEN {
        return Err(UserError::FieldTooLong {
            field,
            max: MAX_FIELD_LEN,
        });
    }
    Ok(trimmed)
}
