use axum::{extract::State, http::StatusCode, Json};
use contracts::shared::diagnostics::{
    ProbeEndpointRequest, ProbeImageRequest, ProbeImageResponse, ProbeResult,
};
use contracts::shared::logger::LogEntry;

use crate::shared::error::AppError;
use crate::shared::state::AppState;

/// GET /api/diagnostics/errors
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<LogEntry>> {
    Json(state.diagnostics.get_all_logs())
}

/// DELETE /api/diagnostics/errors
pub async fn clear_all(State(state): State<AppState>) -> StatusCode {
    state.diagnostics.clear_all_logs();
    tracing::info!("Diagnostic log cleared");
    StatusCode::OK
}

/// POST /api/diagnostics/probe/endpoint
pub async fn probe_endpoint(
    State(state): State<AppState>,
    Json(req): Json<ProbeEndpointRequest>,
) -> Result<Json<ProbeResult>, AppError> {
    let endpoint = req.endpoint.trim();
    if endpoint.is_empty() {
        return Err(AppError::Validation("endpoint must not be empty".into()));
    }
    Ok(Json(state.prober.check_api_endpoint(endpoint).await))
}

/// POST /api/diagnostics/probe/image
pub async fn probe_image(
    State(state): State<AppState>,
    Json(req): Json<ProbeImageRequest>,
) -> Result<Json<ProbeImageResponse>, AppError> {
    let url = req.url.trim();
    if url.is_empty() {
        return Err(AppError::Validation("url must not be empty".into()));
    }
    let exists = state.prober.check_image_exists(url).await;
    Ok(Json(ProbeImageResponse {
        url: url.to_string(),
        exists,
    }))
}
