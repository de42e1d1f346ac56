use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::shared::state::AppState;

/// GET /api/v1/me
///
/// Proxies the caller profile from the identity gateway.
pub async fn current_user(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let authorization = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok());

    match state.gateway.fetch_current_user(authorization).await {
        Ok(profile) => Json(profile).into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch user info from {}: {}", state.gateway.base_url(), e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Failed to fetch user info" })),
            )
                .into_response()
        }
    }
}
