use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::system::routes::{IssueKind, RouteValidation};
use thiserror::Error;

/// Application-level error type that maps to HTTP responses
#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Denial for a failed route validation.
    ///
    /// The most fundamental issue decides the status: a missing route beats
    /// missing credentials, which beat a role mismatch. Defects of the route
    /// table itself are server errors.
    pub fn from_denial(validation: &RouteValidation) -> Self {
        let message = validation.errors().join("; ");

        if validation.has(IssueKind::RouteNotFound) {
            AppError::NotFound(message)
        } else if validation.has(IssueKind::AuthenticationRequired) {
            AppError::Unauthorized(message)
        } else if validation.has(IssueKind::InsufficientRole) {
            AppError::Forbidden(message)
        } else {
            AppError::Internal(message)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        });
        (status, Json(body)).into_response()
    }
}
