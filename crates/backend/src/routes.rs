use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::shared::state::AppState;
use crate::system::auth::middleware::guard_navigation;
use crate::system::middleware::request_logger::request_logger;
use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    // Навигация по страницам: проверка реестра, затем статика
    let pages = Router::new()
        .fallback_service(ServeDir::new(&state.assets_dir))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            guard_navigation,
        ));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // ROUTE REGISTRY
        // ========================================
        .route("/api/system/routes", get(system::handlers::routes::list))
        .route(
            "/api/system/routes/validate",
            get(system::handlers::routes::validate),
        )
        .route(
            "/api/system/routes/validate-all",
            get(system::handlers::routes::validate_all),
        )
        .route(
            "/api/system/routes/menu",
            get(system::handlers::routes::menu),
        )
        .route(
            "/api/system/routes/access",
            get(system::handlers::routes::access),
        )
        // ========================================
        // DIAGNOSTICS
        // ========================================
        .route(
            "/api/diagnostics/errors",
            get(handlers::diagnostics::list_all).delete(handlers::diagnostics::clear_all),
        )
        .route(
            "/api/diagnostics/probe/endpoint",
            post(handlers::diagnostics::probe_endpoint),
        )
        .route(
            "/api/diagnostics/probe/image",
            post(handlers::diagnostics::probe_image),
        )
        .route("/api/error-report", post(handlers::error_report::create))
        // ========================================
        // GATEWAY
        // ========================================
        .route("/api/v1/me", get(system::handlers::me::current_user))
        .fallback_service(pages)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(state)
}
