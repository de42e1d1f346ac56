use axum::{extract::State, http::StatusCode, Json};
use contracts::shared::diagnostics::{ErrorReport, ErrorReportAccepted};

use crate::shared::error::AppError;
use crate::shared::logger::CATEGORY_ERROR_BOUNDARY;
use crate::shared::state::AppState;

/// POST /api/error-report
///
/// Принимает отчёт от error boundary дашборда и сохраняет его в журнале.
pub async fn create(
    State(state): State<AppState>,
    Json(report): Json<ErrorReport>,
) -> Result<(StatusCode, Json<ErrorReportAccepted>), AppError> {
    if report.message.trim().is_empty() {
        return Err(AppError::Validation("message must not be empty".into()));
    }

    tracing::warn!(
        app = %report.app,
        url = report.url.as_deref().unwrap_or("-"),
        "client error reported: {}",
        report.message.trim()
    );
    if let Some(stack) = &report.component_stack {
        tracing::debug!("component stack: {}", stack);
    }

    let id = state
        .diagnostics
        .client(CATEGORY_ERROR_BOUNDARY, report.summary());

    Ok((StatusCode::ACCEPTED, Json(ErrorReportAccepted { id })))
}
