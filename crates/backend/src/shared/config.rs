use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    pub url: String,
    #[serde(default = "default_gateway_timeout")]
    pub timeout_secs: u64,
}

fn default_gateway_timeout() -> u64 {
    10
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080".to_string(),
            timeout_secs: default_gateway_timeout(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Header carrying the caller role resolved by the upstream gateway
    pub role_header: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            role_header: "x-user-role".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DiagnosticsConfig {
    pub probe_timeout_secs: u64,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            probe_timeout_secs: 5,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    pub dir: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: "dist".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RoutesConfig {
    /// Mounted admin views; empty means every view referenced by the route table
    #[serde(default)]
    pub components: Vec<String>,
}

impl DiagnosticsConfig {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

impl GatewayConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[gateway]
url = "http://localhost:8080"
timeout_secs = 10

[auth]
role_header = "x-user-role"

[diagnostics]
probe_timeout_secs = 5

[assets]
dir = "dist"

[routes]
components = []
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `GATEWAY_URL` overrides the gateway address in either case.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = load_file_or_default()?;
    apply_env_overrides(&mut config, std::env::var("GATEWAY_URL").ok());
    Ok(config)
}

fn load_file_or_default() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut Config, gateway_url: Option<String>) {
    if let Some(url) = gateway_url.filter(|u| !u.trim().is_empty()) {
        tracing::info!("Gateway URL overridden by GATEWAY_URL: {}", url);
        config.gateway.url = url;
    }
}

/// Get the static assets directory from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_assets_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.assets.dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(dir);
        }
    }

    PathBuf::from(&config.assets.dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.gateway.url, "http://localhost:8080");
        assert_eq!(config.auth.role_header, "x-user-role");
        assert_eq!(config.diagnostics.probe_timeout(), Duration::from_secs(5));
        assert!(config.routes.components.is_empty());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [gateway]
            url = "http://gateway:9000"
            "#,
        )
        .unwrap();
        assert_eq!(config.gateway.url, "http://gateway:9000");
        assert_eq!(config.gateway.timeout_secs, 10);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.assets.dir, "dist");
    }

    #[test]
    fn test_env_override() {
        let mut config = Config::default();
        apply_env_overrides(&mut config, Some("http://gw.internal".to_string()));
        assert_eq!(config.gateway.url, "http://gw.internal");

        apply_env_overrides(&mut config, Some("  ".to_string()));
        assert_eq!(config.gateway.url, "http://gw.internal");
    }

    #[test]
    fn test_absolute_assets_dir_kept() {
        let mut config = Config::default();
        let dir = std::env::temp_dir().join("keephy-assets");
        config.assets.dir = dir.to_string_lossy().to_string();
        assert_eq!(get_assets_dir(&config), dir);
    }
}
