//! Runtime Configuration
//!
//! All settings come from the environment; the CLI loads a `.env` file
//! before this module runs. The store connection mirrors the hosting
//! contract of Supabase: a project URL plus API keys.

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent or empty
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A variable is present but unusable
    #[error("invalid value for {var}: {reason}")]
    InvalidVar { var: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(var: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidVar {
            var,
            reason: reason.into(),
        }
    }
}

/// Top-level settings for the backend
#[derive(Debug, Clone)]
pub struct Settings {
    /// External store connection
    pub supabase: SupabaseConfig,

    /// HTTP server binding and CORS
    pub http: HttpServerConfig,
}

impl Settings {
    /// Load all settings from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            supabase: SupabaseConfig::from_env()?,
            http: HttpServerConfig::from_env()?,
        })
    }
}

/// Connection settings for the hosted store
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`
    pub url: String,

    /// Anonymous API key
    pub anon_key: String,

    /// Service-role API key; outranks the anon key when present
    pub service_role_key: Option<String>,
}

impl SupabaseConfig {
    /// Build and validate a store configuration
    pub fn new(
        url: impl Into<String>,
        anon_key: impl Into<String>,
        service_role_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            url: url.into(),
            anon_key: anon_key.into(),
            service_role_key: service_role_key.filter(|k| !k.is_empty()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Read `SUPABASE_URL` / `SUPABASE_ANON_KEY` / `SUPABASE_SERVICE_ROLE_KEY`
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("SUPABASE_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar("SUPABASE_URL"))?;
        let anon_key = env::var("SUPABASE_ANON_KEY").unwrap_or_default();
        let service_role_key = env::var("SUPABASE_SERVICE_ROLE_KEY").ok();

        Self::new(url, anon_key, service_role_key)
    }

    /// Validate the URL and key material
    fn validate(&self) -> Result<(), ConfigError> {
        let parsed = reqwest::Url::parse(&self.url)
            .map_err(|e| ConfigError::invalid("SUPABASE_URL", e.to_string()))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConfigError::invalid(
                    "SUPABASE_URL",
                    format!("unsupported scheme '{}'", other),
                ));
            }
        }

        if self.anon_key.is_empty() && self.service_role_key.is_none() {
            return Err(ConfigError::MissingVar("SUPABASE_ANON_KEY"));
        }

        Ok(())
    }

    /// Key sent with every store request
    pub fn api_key(&self) -> &str {
        self.service_role_key.as_deref().unwrap_or(&self.anon_key)
    }

    /// Base URL of the REST endpoint (`{url}/rest/v1`)
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url.trim_end_matches('/'))
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: local dev servers)
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(), // Vite dev server
        "http://localhost:3000".to_string(), // Common dev port
        "http://127.0.0.1:5173".to_string(),
    ]
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl HttpServerConfig {
    /// Defaults overridden by `PINGCRM_HOST` / `PINGCRM_PORT` / `PINGCRM_CORS_ORIGINS`
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(host) = env::var("PINGCRM_HOST") {
            if !host.is_empty() {
                config.host = host;
            }
        }

        if let Ok(port) = env::var("PINGCRM_PORT") {
            if !port.is_empty() {
                config.port = port
                    .parse()
                    .map_err(|_| ConfigError::invalid("PINGCRM_PORT", format!("'{}'", port)))?;
            }
        }

        if let Ok(origins) = env::var("PINGCRM_CORS_ORIGINS") {
            if !origins.is_empty() {
                config.cors_origins = parse_cors_origins(&origins);
            }
        }

        Ok(config)
    }

    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Split a comma-separated origin list
fn parse_cors_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
