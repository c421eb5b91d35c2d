//! Profile of the authenticated user.

use axum::{Json, Router, extract::State, routing::get};
use tally_core::User;

use crate::AppState;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Creates the profile router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/profile", get(show_profile))
}

/// GET /profile - Current user's profile.
async fn show_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<User>, ApiError> {
    let user = state.user_service.show_profile(auth.user_id()).await?;
    Ok(Json(user))
}
