//! Error responses.
//!
//! Every failure leaves the API as `{"error": CODE, "message": text}` with the
//! status owned by [`AppError`].

use axum::{
    Json,
    extract::{FromRequest, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tally_core::{StatementError, UserError};
use tally_shared::AppError;
use tracing::error;

/// An error ready to be rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    /// Builds an error response from its parts.
    #[must_use]
    pub const fn new(status: StatusCode, code: &'static str, message: String) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    /// HTTP status of the response.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Wire error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    fn from_app(code: &'static str, err: AppError) -> Self {
        let status = StatusCode::from_u16(err.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if err.is_server_error() {
            error!(code, error = %err, "Request failed");
            return Self::new(status, code, "Internal server error".to_string());
        }
        Self::new(status, code, err.message().to_string())
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let code = err.error_code();
        Self::from_app(code, err)
    }
}

impl From<StatementError> for ApiError {
    fn from(err: StatementError) -> Self {
        let code = err.error_code();
        Self::from_app(code, err.into())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        let code = err.error_code();
        Self::from_app(code, err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            rejection.body_text(),
        )
    }
}

/// JSON body extractor that rejects with [`ApiError`].
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({ "error": self.code, "message": self.message })),
        )
            .into_response()
    }
}
