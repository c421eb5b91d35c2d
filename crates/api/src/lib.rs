//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes
//! - Authentication middleware
//! - Error responses

pub mod error;
pub mod middleware;
pub mod routes;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tally_core::{StatementService, StatementStore, UserService, UserStore};
use tally_db::{StatementRepository, UserRepository};
use tally_shared::JwtService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Registration, sessions, and profiles.
    pub user_service: Arc<UserService>,
    /// Deposits, withdrawals, and balances.
    pub statement_service: Arc<StatementService>,
    /// JWT service for token operations.
    pub jwt_service: Arc<JwtService>,
}

impl AppState {
    /// Builds the state over the given stores.
    #[must_use]
    pub fn new(
        users: Arc<dyn UserStore>,
        statements: Arc<dyn StatementStore>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            user_service: Arc::new(UserService::new(users.clone(), jwt_service.clone())),
            statement_service: Arc::new(StatementService::new(users, statements)),
            jwt_service,
        }
    }

    /// Builds the state over Postgres-backed repositories.
    #[must_use]
    pub fn with_database(db: &DatabaseConnection, jwt_service: Arc<JwtService>) -> Self {
        Self::new(
            Arc::new(UserRepository::new(db.clone())),
            Arc::new(StatementRepository::new(db.clone())),
            jwt_service,
        )
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
