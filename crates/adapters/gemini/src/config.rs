//! Model collaborator configuration.

use serde::Deserialize;

/// Connection settings for the Generative Language API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// API key, usually injected through `GEMINI_API_KEY`.
    pub api_key: String,
    /// Model identifier used for `generateContent`.
    pub model: String,
    /// API base URL.
    pub base_url: String,
    /// Timeout applied to every API call, in seconds.
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_secs: 10,
        }
    }
}
