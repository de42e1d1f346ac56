use axum::{
    extract::{Query, State},
    Json,
};
use contracts::system::routes::{
    NavigationItem, RouteAccessResponse, RouteDefinition, RouteQuery, RouteValidationResponse,
    ValidateAllRoutesResponse,
};

use crate::shared::state::AppState;
use crate::system::auth::extractor::Caller;

/// GET /api/system/routes
pub async fn list(State(state): State<AppState>) -> Json<Vec<RouteDefinition>> {
    Json(
        state
            .registry
            .routes()
            .iter()
            .map(|r| r.to_definition())
            .collect(),
    )
}

/// GET /api/system/routes/validate?path=/business&role=admin
pub async fn validate(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Query(query): Query<RouteQuery>,
) -> Json<RouteValidationResponse> {
    let validation = state.registry.validate_route(&query.path, &caller);
    Json(validation.into_response(&query.path))
}

/// GET /api/system/routes/validate-all?role=admin
pub async fn validate_all(
    State(state): State<AppState>,
    Caller(caller): Caller,
) -> Json<ValidateAllRoutesResponse> {
    let summary = state.registry.validate_all_routes(&caller);
    if !summary.errors.is_empty() {
        tracing::debug!(
            role = caller.role().unwrap_or("-"),
            valid = summary.valid_routes,
            total = summary.total_routes,
            "route table has issues for caller"
        );
    }
    Json(summary)
}

/// GET /api/system/routes/menu?role=manager
pub async fn menu(
    State(state): State<AppState>,
    Caller(caller): Caller,
) -> Json<Vec<NavigationItem>> {
    Json(state.registry.navigation_menu(caller.role()))
}

/// GET /api/system/routes/access?path=/branch/7&role=manager
pub async fn access(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Query(query): Query<RouteQuery>,
) -> Json<RouteAccessResponse> {
    Json(RouteAccessResponse {
        allowed: state.registry.can_access_route(&query.path, &caller),
        path: query.path,
    })
}
