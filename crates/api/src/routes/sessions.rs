//! Sessions: exchange credentials for a bearer token.

use axum::{Json, Router, extract::State, routing::post};
use tally_core::user::AuthenticateInput;
use tally_shared::auth::{AuthenticateRequest, AuthenticateResponse, UserInfo};
use tracing::info;

use crate::AppState;
use crate::error::{ApiError, AppJson};

/// Creates the sessions router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/sessions", post(authenticate))
}

/// POST /sessions - Authenticate user and return a token.
async fn authenticate(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AuthenticateRequest>,
) -> Result<Json<AuthenticateResponse>, ApiError> {
    let authenticated = state
        .user_service
        .authenticate(AuthenticateInput {
            email: payload.email,
            password: payload.password,
        })
        .await
        .inspect_err(|e| info!(error = %e, "Failed login attempt"))?;

    let user = authenticated.user;
    info!(user_id = %user.id, "User logged in successfully");

    Ok(Json(AuthenticateResponse {
        user: UserInfo {
            id: user.id.into_inner(),
            name: user.name,
            email: user.email,
        },
        token: authenticated.token,
    }))
}
