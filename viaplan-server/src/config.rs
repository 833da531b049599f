use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;
use viaplan_core::loading::PlannerConfig;

/// Full server configuration: the HTTP listener plus the planner tables
/// (`[[regions]]` and `[provider]`) consumed by the core.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(flatten)]
    pub planner: PlannerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

fn default_listen() -> SocketAddr {
    ([127, 0, 0, 1], 3000).into()
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read config '{}': {e}", path.display()))?;
        let config: AppConfig = toml::from_str(&raw)
            .map_err(|e| format!("cannot parse config '{}': {e}", path.display()))?;
        Ok(config)
    }
}
