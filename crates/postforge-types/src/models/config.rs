//! Server and upstream configuration models.

use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_gemini_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.to_string()
}

fn default_gemini_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_request_timeout() -> u64 {
    120
}

// ============================================================================
// Config structs
// ============================================================================

/// Upstream Gemini configuration.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`. Empty means every call will fail upstream.
    #[serde(default)]
    pub api_key: String,
    /// Model id used for every request
    #[validate(length(min = 1))]
    #[serde(default = "default_gemini_model")]
    pub model: String,
    /// API base URL (no trailing slash)
    #[validate(url)]
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    /// HTTP client timeout for one upstream call
    #[validate(range(min = 1))]
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl GeminiConfig {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// API key with everything but the last four characters hidden.
    pub fn masked_api_key(&self) -> String {
        let key = self.api_key.trim();
        if key.is_empty() {
            return "<unset>".to_string();
        }
        let tail: String = key.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
        format!("****{}", tail)
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_gemini_model(),
            base_url: default_gemini_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.masked_api_key())
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

/// Top-level server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ServerConfig {
    /// Bind address
    #[validate(length(min = 1))]
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port
    #[validate(range(min = 1))]
    #[serde(default = "default_port")]
    pub port: u16,
    /// Origins allowed for cross-origin browser access; empty means same-origin only
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    /// Optional pre-built frontend served at `/`
    #[serde(default)]
    pub static_dir: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub gemini: GeminiConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
            static_dir: None,
            gemini: GeminiConfig::default(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string for logging.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
