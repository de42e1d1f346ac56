use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use contracts::system::routes::{AdminComponent, RouteRegistry};

use super::config::{get_assets_dir, Config};
use super::diagnostics::Prober;
use super::gateway::GatewayClient;
use super::logger::DiagnosticLog;

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registry: Arc<RouteRegistry>,
    pub diagnostics: DiagnosticLog,
    pub prober: Prober,
    pub gateway: GatewayClient,
    pub assets_dir: PathBuf,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let registry = build_registry(&config)?;
        let diagnostics = DiagnosticLog::new();
        let prober = Prober::new(diagnostics.clone(), config.diagnostics.probe_timeout())?;
        let gateway = GatewayClient::new(&config.gateway.url, config.gateway.timeout())?;
        let assets_dir = get_assets_dir(&config);

        tracing::info!(
            routes = registry.len(),
            components = registry.registered_components().len(),
            "Route registry ready"
        );

        Ok(Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            diagnostics,
            prober,
            gateway,
            assets_dir,
        })
    }
}

/// Canonical table, optionally narrowed to the views listed in `[routes] components`
fn build_registry(config: &Config) -> anyhow::Result<RouteRegistry> {
    let registry = RouteRegistry::admin().context("invalid admin route table")?;

    if config.routes.components.is_empty() {
        return Ok(registry);
    }

    let components = config
        .routes
        .components
        .iter()
        .map(|name| name.parse::<AdminComponent>())
        .collect::<Result<Vec<_>, _>>()
        .context("invalid [routes] components in config")?;

    Ok(registry.with_registered_components(components))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_registers_all_table_components() {
        let state = AppState::new(Config::default()).unwrap();
        assert_eq!(
            state.registry.registered_components().len(),
            state.registry.len()
        );
    }

    #[test]
    fn test_configured_components_narrow_registry() {
        let mut config = Config::default();
        config.routes.components = vec!["Dashboard".into(), "Settings".into()];
        let state = AppState::new(config).unwrap();
        assert_eq!(state.registry.registered_components().len(), 2);
    }

    #[test]
    fn test_unknown_configured_component_fails_startup() {
        let mut config = Config::default();
        config.routes.components = vec!["Billing".into()];
        let err = AppState::new(config).unwrap_err();
        assert!(format!("{err:#}").contains("unknown admin component 'Billing'"));
    }
}
