use axum::{
    body::Body,
    extract::{Request, State},
    http::{StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::session;
use crate::shared::error::AppError;
use crate::shared::logger::CATEGORY_RESOURCE_LOAD;
use crate::shared::state::AppState;

const SPA_ENTRY: &str = "/index.html";

/// Last segment carries a file extension (`/assets/app.js`, `/imgs/logo.png`)
pub fn is_asset_path(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .is_some_and(|segment| segment.contains('.'))
}

/// Middleware that guards page navigations with the route registry
///
/// Any path the registry resolves is a navigation, even when an id carries a
/// dot (`/user/jane.doe`). Unresolved paths with a file extension go to the
/// asset service; a missing asset is recorded as a resource loading error.
/// Navigations are denied on any validation issue, otherwise answered with
/// the SPA entry page.
pub async fn guard_navigation(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();

    let is_route = state.registry.find(&path).is_some();

    if !is_route && is_asset_path(&path) {
        let response = next.run(req).await;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::warn!(%path, "asset not found");
            state.diagnostics.server(
                CATEGORY_RESOURCE_LOAD,
                format!("Admin resource loading error: {path}"),
            );
        }
        return response;
    }

    let caller = session::caller_from_headers(req.headers(), &state.config.auth.role_header);
    let validation = state.registry.validate_route(&path, &caller);

    if !validation.is_valid {
        tracing::info!(
            %path,
            role = caller.role().unwrap_or("-"),
            errors = ?validation.errors(),
            "navigation denied"
        );
        return AppError::from_denial(&validation).into_response();
    }

    *req.uri_mut() = Uri::from_static(SPA_ENTRY);
    next.run(req).await
}
