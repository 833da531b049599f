use std::time::Duration;

use serde::Deserialize;

use crate::model::Place;
use crate::oracle::DEFAULT_BASE_URL;

/// Static configuration of the planner: the place set and the provider.
///
/// The place set is an ordered list of named regions; concatenating their
/// place lists, in configuration order, defines the node set of the graph.
#[derive(Debug, Clone, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// A named sub-list of places
#[derive(Debug, Clone, Deserialize)]
pub struct Region {
    pub name: String,
    pub places: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Name of the environment variable carrying the API credential
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Per-call timeout; a timed-out lookup is an ordinary provider failure
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl PlannerConfig {
    /// The configured places, region lists concatenated in order
    pub fn places(&self) -> Vec<Place> {
        self.regions
            .iter()
            .flat_map(|region| {
                region
                    .places
                    .iter()
                    .map(|name| Place::new(name, &region.name))
            })
            .collect()
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_key_env() -> String {
    "GOOGLE_MAPS_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}
