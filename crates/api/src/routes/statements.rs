//! Statement routes: deposits, withdrawals, balance, and single-statement lookup.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tally_core::statement::{Balance, CreateStatementInput, OperationType, Statement};
use tally_shared::types::StatementId;
use tracing::info;

use crate::AppState;
use crate::error::{ApiError, AppJson};
use crate::middleware::auth::AuthUser;

/// Request body for deposits and withdrawals.
#[derive(Debug, Deserialize)]
pub struct CreateStatementRequest {
    /// Amount, as a JSON number or decimal string.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Creates the statements router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/statements/deposit", post(deposit))
        .route("/statements/withdraw", post(withdraw))
        .route("/statements/balance", get(get_balance))
        .route("/statements/{statement_id}", get(get_statement_operation))
}

/// POST /statements/deposit - Record a deposit.
async fn deposit(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(payload): AppJson<CreateStatementRequest>,
) -> Result<impl IntoResponse, ApiError> {
    create(&state, &auth, OperationType::Deposit, payload).await
}

/// POST /statements/withdraw - Record a withdrawal.
async fn withdraw(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(payload): AppJson<CreateStatementRequest>,
) -> Result<impl IntoResponse, ApiError> {
    create(&state, &auth, OperationType::Withdraw, payload).await
}

async fn create(
    state: &AppState,
    auth: &AuthUser,
    kind: OperationType,
    payload: CreateStatementRequest,
) -> Result<(StatusCode, Json<Statement>), ApiError> {
    let statement = state
        .statement_service
        .create_statement(CreateStatementInput {
            user_id: auth.user_id(),
            kind,
            amount: payload.amount,
            description: payload.description,
        })
        .await?;

    info!(
        statement_id = %statement.id,
        user_id = %statement.user_id,
        kind = %kind,
        amount = %statement.amount,
        "Statement created"
    );

    Ok((StatusCode::CREATED, Json(statement)))
}

/// GET /statements/balance - Balance and full history.
async fn get_balance(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Balance>, ApiError> {
    let balance = state.statement_service.get_balance(auth.user_id()).await?;
    Ok(Json(balance))
}

/// GET /statements/{statement_id} - A single statement owned by the caller.
///
/// An id that does not parse cannot name an existing statement, so it is
/// reported as not found.
async fn get_statement_operation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(statement_id): Path<String>,
) -> Result<Json<Statement>, ApiError> {
    let Ok(statement_id) = statement_id.parse::<StatementId>() else {
        return Err(ApiError::new(
            StatusCode::NOT_FOUND,
            "STATEMENT_NOT_FOUND",
            "Statement not found".to_string(),
        ));
    };

    let statement = state
        .statement_service
        .get_statement_operation(auth.user_id(), statement_id)
        .await?;
    Ok(Json(statement))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::middleware::from_fn_with_state;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::middleware::auth::auth_middleware;
    use crate::test_support::{body_json, get_request, json_request, state, user_with_token};

    fn app(state: AppState) -> Router {
        routes()
            .layer(from_fn_with_state(state.clone(), auth_middleware))
            .with_state(state)
    }

    async fn post_statement(
        app: &Router,
        token: &str,
        path: &str,
        body: serde_json::Value,
    ) -> axum::response::Response {
        app.clone()
            .oneshot(json_request(
                "POST",
                &format!("/statements/{path}"),
                Some(token),
                &body,
            ))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_deposit() {
        let state = state();
        let (user_id, token) = user_with_token(&state, "johndoe@email.com").await;
        let app = app(state);

        let response = post_statement(
            &app,
            &token,
            "deposit",
            json!({ "amount": 99, "description": "sample description" }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["type"], "deposit");
        assert_eq!(body["amount"], 99);
        assert_eq!(body["description"], "sample description");
        assert_eq!(body["user_id"], user_id.to_string());
    }

    #[tokio::test]
    async fn test_withdraw() {
        let state = state();
        let (_, token) = user_with_token(&state, "johndoe@email.com").await;
        let app = app(state);

        post_statement(&app, &token, "deposit", json!({ "amount": 99 })).await;
        let response = post_statement(
            &app,
            &token,
            "withdraw",
            json!({ "amount": "99", "description": "sample description" }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["type"], "withdraw");
        assert_eq!(body["amount"], 99);
    }

    #[tokio::test]
    async fn test_withdraw_insufficient_funds() {
        let state = state();
        let (_, token) = user_with_token(&state, "johndoe@email.com").await;
        let app = app(state);

        post_statement(&app, &token, "deposit", json!({ "amount": 99 })).await;
        let response = post_statement(&app, &token, "withdraw", json!({ "amount": 999 })).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "INSUFFICIENT_FUNDS");
        assert_eq!(body["message"], "Insufficient funds");
    }

    #[tokio::test]
    async fn test_negative_amount_rejected() {
        let state = state();
        let (_, token) = user_with_token(&state, "johndoe@email.com").await;
        let app = app(state);

        let response = post_statement(&app, &token, "deposit", json!({ "amount": "-5" })).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "NEGATIVE_AMOUNT");
    }

    #[tokio::test]
    async fn test_malformed_amount_uses_error_shape() {
        let state = state();
        let (_, token) = user_with_token(&state, "johndoe@email.com").await;
        let app = app(state);

        for body in [json!({ "description": "no amount" }), json!({ "amount": "abc" })] {
            let response = post_statement(&app, &token, "deposit", body).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = body_json(response).await;
            assert_eq!(body["error"], "VALIDATION_ERROR");
            assert!(body["message"].is_string());
        }

        let response = app
            .oneshot(get_request("/statements/balance", Some(&token)))
            .await
            .unwrap();
        let history = body_json(response).await;
        assert!(history["statement"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fractional_amount_keeps_scale() {
        let state = state();
        let (_, token) = user_with_token(&state, "johndoe@email.com").await;
        let app = app(state);

        let body: serde_json::Value = serde_json::from_str(r#"{ "amount": 12.50 }"#).unwrap();
        let response = post_statement(&app, &token, "deposit", body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["amount"].to_string(), "12.50");

        let response =
            post_statement(&app, &token, "withdraw", json!({ "amount": "0.25" })).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["amount"].to_string(), "0.25");
    }

    #[tokio::test]
    async fn test_deposit_overflowing_balance_rejected() {
        let state = state();
        let (_, token) = user_with_token(&state, "johndoe@email.com").await;
        let app = app(state);
        let max = Decimal::MAX.to_string();

        let first = post_statement(&app, &token, "deposit", json!({ "amount": max })).await;
        assert_eq!(first.status(), StatusCode::CREATED);
        let second = post_statement(&app, &token, "deposit", json!({ "amount": max })).await;

        assert_eq!(second.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(second).await["error"], "AMOUNT_TOO_LARGE");

        let response = app
            .oneshot(get_request("/statements/balance", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["balance"].to_string(), max);
    }

    #[tokio::test]
    async fn test_get_balance() {
        let state = state();
        let (_, token) = user_with_token(&state, "johndoe@email.com").await;
        let app = app(state);

        post_statement(&app, &token, "deposit", json!({ "amount": 99 })).await;
        post_statement(&app, &token, "withdraw", json!({ "amount": 9 })).await;

        let response = app
            .oneshot(get_request("/statements/balance", Some(&token)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["balance"], 90);
        let history = body["statement"].as_array().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0]["amount"], 99);
        assert_eq!(history[0]["type"], "deposit");
        assert_eq!(history[1]["type"], "withdraw");
    }

    #[tokio::test]
    async fn test_get_statement_operation() {
        let state = state();
        let (_, token) = user_with_token(&state, "johndoe@email.com").await;
        let app = app(state);

        let created = body_json(
            post_statement(&app, &token, "deposit", json!({ "amount": 99 })).await,
        )
        .await;
        let id = created["id"].as_str().unwrap();

        let response = app
            .oneshot(get_request(&format!("/statements/{id}"), Some(&token)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, created);
    }

    #[tokio::test]
    async fn test_get_statement_operation_not_found() {
        let state = state();
        let (_, token) = user_with_token(&state, "johndoe@email.com").await;
        let app = app(state);

        for id in [StatementId::new().to_string(), "invalid-id".to_string()] {
            let response = app
                .clone()
                .oneshot(get_request(&format!("/statements/{id}"), Some(&token)))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert_eq!(body_json(response).await["error"], "STATEMENT_NOT_FOUND");
        }
    }

    #[tokio::test]
    async fn test_other_users_statement_is_not_found() {
        let state = state();
        let (_, alice) = user_with_token(&state, "alice@email.com").await;
        let (_, bob) = user_with_token(&state, "bob@email.com").await;
        let app = app(state);

        let created = body_json(
            post_statement(&app, &alice, "deposit", json!({ "amount": 99 })).await,
        )
        .await;
        let id = created["id"].as_str().unwrap();

        let response = app
            .oneshot(get_request(&format!("/statements/{id}"), Some(&bob)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_statements_require_token() {
        let app = app(state());

        let response = app
            .oneshot(get_request("/statements/balance", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
