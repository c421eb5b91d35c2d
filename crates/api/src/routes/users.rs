//! User registration.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use tally_core::user::CreateUserInput;
use tally_shared::auth::CreateUserRequest;
use tracing::info;

use crate::AppState;
use crate::error::{ApiError, AppJson};

/// Creates the users router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/users", post(create_user))
}

/// POST /users - Register a new user.
async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .user_service
        .create_user(CreateUserInput {
            name: payload.name,
            email: payload.email,
            password: payload.password,
        })
        .await?;

    info!(user_id = %user.id, "User registered");

    Ok((StatusCode::CREATED, Json(user)))
}
