//! Users: registration, authentication, and profiles.

pub mod error;
pub mod service;
pub mod types;

pub use error::UserError;
pub use service::UserService;
pub use types::{AuthenticateInput, AuthenticatedUser, CreateUserInput, User};
