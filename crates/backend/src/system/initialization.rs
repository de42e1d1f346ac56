use contracts::system::auth::CallerContext;
use contracts::system::routes::table::roles;
use contracts::system::routes::IssueKind;

use crate::shared::state::AppState;

const KNOWN_ROLES: &[&str] = &[
    roles::SUPER_ADMIN,
    roles::ADMIN,
    roles::MANAGER,
    roles::ANALYST,
];

/// Startup self-check: route table summary per role, SPA entry, gateway reachability.
///
/// Never fails; problems go to the tracing log and the diagnostic log.
pub async fn startup_self_check(state: AppState) {
    tracing::info!("Running startup self-check");

    for role in KNOWN_ROLES {
        let caller = CallerContext::authenticated(*role);
        let summary = state.registry.validate_all_routes(&caller);
        let menu = state.registry.navigation_menu(Some(*role));

        tracing::info!(
            role = *role,
            valid = summary.valid_routes,
            total = summary.total_routes,
            menu_items = menu.len(),
            "Route access summary"
        );
    }

    // Дефекты таблицы не зависят от роли
    let owner = CallerContext::authenticated(roles::SUPER_ADMIN);
    for route in state.registry.routes() {
        let validation = state.registry.validate_route(route.path(), &owner);
        if validation.has(IssueKind::ComponentNotRegistered)
            || validation.has(IssueKind::MissingMetadata)
        {
            tracing::warn!(
                route = route.path(),
                "Route table defect: {}",
                validation.errors().join("; ")
            );
        }
    }

    let entry = state.assets_dir.join("index.html");
    if !entry.exists() {
        tracing::warn!(
            "SPA entry {} not found; allowed navigations will return 404",
            entry.display()
        );
    }

    let health = format!("{}/health", state.gateway.base_url());
    let result = state.prober.check_api_endpoint(&health).await;
    if result.is_reachable() {
        tracing::info!("Gateway {} reachable (status {})", health, result.status);
    } else {
        tracing::warn!(
            "Gateway {} unreachable: {}",
            health,
            result.error.as_deref().unwrap_or("unknown error")
        );
    }

    tracing::info!("Startup self-check finished");
}
