//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

use super::error::{Error, Result};

/// Default Cloudflare API v4 base URL.
pub const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Environment variable holding the Cloudflare API token.
pub const API_TOKEN_ENV: &str = "CLOUDFLARE_API_TOKEN";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by concern for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Cloudflare API access.
    pub cloudflare: CloudflareConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for the Cloudflare API client.
#[derive(Clone, Serialize, Deserialize)]
pub struct CloudflareConfig {
    /// API token sent as a bearer credential.
    /// Create one at: https://dash.cloudflare.com/profile/api-tokens
    #[serde(default, skip_serializing)]
    pub api_token: Option<String>,

    /// Base URL of the Cloudflare API, without a trailing slash.
    pub api_base: String,

    /// Whole-request timeout applied by the HTTP client.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CloudflareConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareConfig")
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for CloudflareConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            api_base: CLOUDFLARE_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CloudflareConfig {
    /// Create a configuration for the given token and API base.
    pub fn new(api_token: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            api_token: Some(api_token.into()),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// The configured token, or `None` when it is unset or blank.
    pub fn token(&self) -> Option<&str> {
        self.api_token.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Build the shared HTTP client used for Cloudflare calls.
    pub fn build_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "cloudflare-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            cloudflare: CloudflareConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`); Cloudflare settings use `CLOUDFLARE_`
    /// (`CLOUDFLARE_API_TOKEN`, `CLOUDFLARE_API_BASE`, `CLOUDFLARE_TIMEOUT_SECS`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // A missing token is reported per call, not at startup.
        match std::env::var(API_TOKEN_ENV) {
            Ok(token) if !token.is_empty() => {
                config.cloudflare.api_token = Some(token);
                info!("Cloudflare API token loaded from environment");
            }
            _ => {
                warn!(
                    "{} not set - list_zones calls will return an error until it is configured",
                    API_TOKEN_ENV
                );
            }
        }

        if let Ok(base) = std::env::var("CLOUDFLARE_API_BASE") {
            config.cloudflare.api_base = base.trim_end_matches('/').to_string();
            info!("Using Cloudflare API base: {}", config.cloudflare.api_base);
        }

        if let Ok(timeout) = std::env::var("CLOUDFLARE_TIMEOUT_SECS") {
            config.cloudflare.timeout_secs = parse_timeout(&timeout);
        }

        config
    }

    /// Check settings that would make every call fail.
    pub fn validate(&self) -> Result<()> {
        let base = &self.cloudflare.api_base;
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            return Err(Error::config(format!(
                "Cloudflare API base must be an http(s) URL, got '{}'",
                base
            )));
        }

        if self.cloudflare.timeout_secs == 0 {
            return Err(Error::config("Cloudflare timeout must be greater than 0"));
        }

        Ok(())
    }
}

/// Parse a timeout in seconds, falling back to the default with a warning.
fn parse_timeout(value: &str) -> u64 {
    match value.trim().parse() {
        Ok(secs) => secs,
        Err(e) => {
            warn!(
                "Invalid CLOUDFLARE_TIMEOUT_SECS '{}' ({}), using default of {}s",
                value, e, DEFAULT_TIMEOUT_SECS
            );
            DEFAULT_TIMEOUT_SECS
        }
    }
}
