//! Relay and server configuration
//!
//! Configuration is read from the environment once at startup and injected
//! into the relay at construction time; nothing reads ambient process state
//! per call.

use serde::Deserialize;

/// Default upstream model when `GOOGLE_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default Google AI Studio endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Upstream configuration for the chat relay.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    /// API key for the Generative Language API (`GEMINI_API_KEY`)
    pub api_key: Option<String>,

    /// Upstream model identifier
    pub model: String,

    /// Base URL of the upstream service
    pub base_url: String,

    /// API version path segment
    pub api_version: String,

    /// Hard wall-clock bound on one upstream call, in seconds
    pub request_timeout: u64,

    /// Connection establishment timeout, in seconds
    pub connect_timeout: u64,
}

impl RelayConfig {
    /// Create a configuration with the given API key and default endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: "v1beta".to_string(),
            request_timeout: 30,
            connect_timeout: 10,
        }
    }

    /// Read configuration from `GEMINI_API_KEY` and `GOOGLE_MODEL`.
    ///
    /// A missing key is not an error here; `validate` rejects it at startup
    /// and the relay classifies it per call.
    pub fn from_env() -> Self {
        let mut config = Self {
            api_key: std::env::var("GEMINI_API_KEY").ok(),
            ..Self::new("")
        };

        if let Ok(model) = std::env::var("GOOGLE_MODEL") {
            config.model = model;
        }
        if let Ok(base_url) = std::env::var("GEMINI_BASE_URL") {
            config.base_url = base_url;
        }

        config
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.request_timeout = timeout_secs;
        self
    }

    /// Validate the configuration before serving.
    pub fn validate(&self) -> Result<(), String> {
        match &self.api_key {
            None => return Err("GEMINI_API_KEY is not configured".to_string()),
            Some(key) if key.is_empty() => {
                return Err("GEMINI_API_KEY is not configured".to_string());
            }
            Some(_) => {}
        }

        if self.model.is_empty() {
            return Err("Model identifier must not be empty".to_string());
        }

        if self.request_timeout == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }

        if self.connect_timeout > self.request_timeout {
            return Err("Connect timeout cannot be greater than request timeout".to_string());
        }

        Ok(())
    }

    /// URL of the generateContent endpoint for the configured model.
    ///
    /// The API key is not part of the URL; the client attaches it as a query
    /// parameter on dispatch.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url, self.api_version, self.model
        )
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read `HOST` and `PORT` from the environment, defaulting to 0.0.0.0:5000.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
