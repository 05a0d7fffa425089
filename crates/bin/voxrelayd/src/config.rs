//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for the file named by `VOXRELAY_CONFIG` (default `voxrelay.toml`)
//! in the working directory. Every field has a default so the file is
//! optional, except the API key, which validation insists on. Environment
//! variables take precedence over file values.

use serde::Deserialize;

use voxrelay_adapter_backend_reqwest::BackendConfig;
use voxrelay_adapter_gemini::GeminiConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Device-backend settings.
    pub backend: BackendConfig,
    /// Model collaborator settings.
    pub gemini: GeminiConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("VOXRELAY_CONFIG").unwrap_or_else(|_| "voxrelay.toml".to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("VOXRELAY_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("VOXRELAY_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("VOXRELAY_BACKEND_URL") {
            self.backend.base_url = val;
        }
        if let Ok(val) = std::env::var("GEMINI_API_KEY") {
            self.gemini.api_key = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port must be non-zero".to_string(),
            ));
        }
        if self.backend.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "backend.base_url must not be empty".to_string(),
            ));
        }
        if self.backend.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "backend.timeout_secs must be non-zero".to_string(),
            ));
        }
        if self.gemini.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "gemini.base_url must not be empty".to_string(),
            ));
        }
        if self.gemini.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "gemini.timeout_secs must be non-zero".to_string(),
            ));
        }
        if self.gemini.api_key.is_empty() {
            return Err(ConfigError::Validation(
                "gemini.api_key must be set (GEMINI_API_KEY)".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
