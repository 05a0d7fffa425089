//! Device-backend connection configuration.

use serde::Deserialize;

/// Where the automation backend lives and how long to wait for it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the automation backend's REST API.
    pub base_url: String,
    /// Timeout applied to every backend call, in seconds.
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://31.97.22.121:8080".to_string(),
            timeout_secs: 10,
        }
    }
}
