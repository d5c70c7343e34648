//! Configuration management for the MCP server.
//!
//! Configuration is read from environment variables (optionally from a
//! `.env` file) with defaults for everything except the Canvas credentials.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::canvas::ClientOptions;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Canvas instance, credential and request tuning.
    pub canvas: CanvasConfig,
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
}

/// Canvas connection settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// API access token (bearer credential).
    #[serde(skip_serializing, default)]
    pub api_token: String,

    /// Canvas host, e.g. `school.instructure.com`.
    pub domain: String,

    /// Retries after the initial attempt.
    pub max_retries: u32,

    /// Base retry delay in milliseconds.
    pub retry_delay_ms: u64,

    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

/// Custom Debug implementation to redact the token from logs.
impl std::fmt::Debug for CanvasConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasConfig")
            .field(
                "api_token",
                &(!self.api_token.is_empty()).then_some("[REDACTED]"),
            )
            .field("domain", &self.domain)
            .field("max_retries", &self.max_retries)
            .field("retry_delay_ms", &self.retry_delay_ms)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        let defaults = ClientOptions::default();
        Self {
            api_token: String::new(),
            domain: String::new(),
            max_retries: defaults.max_retries,
            retry_delay_ms: defaults.retry_delay.as_millis() as u64,
            timeout_ms: defaults.timeout.as_millis() as u64,
        }
    }
}

impl CanvasConfig {
    /// Load Canvas settings from `CANVAS_*` environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_token: std::env::var("CANVAS_API_TOKEN")
                .map(|t| t.trim().to_string())
                .unwrap_or_default(),
            domain: std::env::var("CANVAS_DOMAIN")
                .map(|d| normalize_domain(&d))
                .unwrap_or_default(),
            max_retries: env_number("CANVAS_MAX_RETRIES", defaults.max_retries),
            retry_delay_ms: env_number("CANVAS_RETRY_DELAY", defaults.retry_delay_ms),
            timeout_ms: env_number("CANVAS_TIMEOUT", defaults.timeout_ms),
        }
    }

    /// Fail fast when the host or the credential is missing.
    pub fn validate(&self) -> Result<()> {
        if self.api_token.is_empty() {
            return Err(Error::config("CANVAS_API_TOKEN is required"));
        }
        if self.domain.is_empty() {
            return Err(Error::config("CANVAS_DOMAIN is required"));
        }
        Ok(())
    }

    /// Options for [`CanvasClient`](crate::canvas::CanvasClient).
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            max_retries: self.max_retries,
            retry_delay: Duration::from_millis(self.retry_delay_ms),
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}

/// Strip a scheme and trailing slashes: `https://x.edu/` -> `x.edu`.
fn normalize_domain(raw: &str) -> String {
    let trimmed = raw.trim();
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    host.trim_end_matches('/').to_string()
}

/// Parse a numeric variable, falling back to `default` when unset or invalid.
pub(crate) fn env_number<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display + Copy,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid value '{}' for {}, using default {}", raw, key, default);
            default
        }),
        Err(_) => default,
    }
}

/// Boolean variable; `false`, `0`, `no` and `off` disable, anything else enables.
#[cfg(feature = "http")]
pub(crate) fn env_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(raw) => !matches!(raw.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off"),
        Err(_) => default,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "canvas-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            canvas: CanvasConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();
        config.canvas = CanvasConfig::from_env();

        if !config.canvas.domain.is_empty() {
            info!("Canvas instance: {}", config.canvas.domain);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const CANVAS_VARS: [&str; 5] = [
        "CANVAS_API_TOKEN",
        "CANVAS_DOMAIN",
        "CANVAS_MAX_RETRIES",
        "CANVAS_RETRY_DELAY",
        "CANVAS_TIMEOUT",
    ];

    fn clear_canvas_env() {
        for key in CANVAS_VARS {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_canvas_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_canvas_env();
        unsafe {
            std::env::set_var("CANVAS_API_TOKEN", "  secret-token \n");
            std::env::set_var("CANVAS_DOMAIN", "https://school.instructure.com/");
            std::env::set_var("CANVAS_MAX_RETRIES", "5");
            std::env::set_var("CANVAS_RETRY_DELAY", "250");
        }

        let canvas = CanvasConfig::from_env();
        assert_eq!(canvas.api_token, "secret-token");
        assert_eq!(canvas.domain, "school.instructure.com");
        assert_eq!(canvas.max_retries, 5);
        assert_eq!(canvas.retry_delay_ms, 250);
        assert_eq!(canvas.timeout_ms, 30_000);
        assert!(canvas.validate().is_ok());

        clear_canvas_env();
    }

    #[test]
    fn test_invalid_number_falls_back_to_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_canvas_env();
        unsafe {
            std::env::set_var("CANVAS_MAX_RETRIES", "lots");
            std::env::set_var("CANVAS_TIMEOUT", "-1");
        }

        let canvas = CanvasConfig::from_env();
        assert_eq!(canvas.max_retries, 3);
        assert_eq!(canvas.timeout_ms, 30_000);

        clear_canvas_env();
    }

    #[test]
    fn test_validate_requires_credentials() {
        let mut canvas = CanvasConfig::default();
        assert!(matches!(canvas.validate(), Err(Error::Config(_))));

        canvas.api_token = "token".into();
        let err = canvas.validate().unwrap_err();
        assert!(err.to_string().contains("CANVAS_DOMAIN"));

        canvas.domain = "canvas.test".into();
        assert!(canvas.validate().is_ok());
    }

    #[test]
    fn test_normalize_domain() {
        assert_eq!(normalize_domain("canvas.test"), "canvas.test");
        assert_eq!(normalize_domain("http://canvas.test//"), "canvas.test");
        assert_eq!(normalize_domain(" https://canvas.test/ "), "canvas.test");
    }

    #[test]
    fn test_token_redacted_in_debug() {
        let canvas = CanvasConfig {
            api_token: "super_secret_token".to_string(),
            domain: "canvas.test".to_string(),
            ..CanvasConfig::default()
        };
        let debug_str = format!("{:?}", canvas);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));

        let json = serde_json::to_string(&canvas).unwrap();
        assert!(!json.contains("super_secret_token"));
    }

    #[test]
    fn test_client_options_defaults() {
        let options = CanvasConfig::default().client_options();
        assert_eq!(options, ClientOptions::default());
    }
}
