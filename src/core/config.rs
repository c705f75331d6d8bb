//! Configuration management for the gateway server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the gateway server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Upstream pvfUtility WebApi settings.
    pub upstream: UpstreamConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the upstream pvfUtility WebApi.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the WebApi, e.g. `http://localhost:27000`.
    pub base_url: String,

    /// Per-request deadline in seconds. The upstream contract specifies no
    /// timeout, so this is a local policy knob rather than inferred behavior.
    pub timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:27000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "pvfutility-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            upstream: UpstreamConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
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
    /// Environment variables are prefixed with `MCP_`, e.g.
    /// `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_PVF_BASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("MCP_PVF_BASE_URL") {
            config.upstream.base_url = base_url;
            info!("Upstream base URL set to {}", config.upstream.base_url);
        } else {
            warn!(
                "MCP_PVF_BASE_URL not set - using default {}",
                config.upstream.base_url
            );
        }

        if let Ok(timeout) = std::env::var("MCP_PVF_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.upstream.timeout_secs = secs,
                Err(_) => warn!("Ignoring unparsable MCP_PVF_TIMEOUT_SECS: {}", timeout),
            }
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_upstream() {
        let config = Config::default();
        assert_eq!(config.upstream.base_url, "http://localhost:27000");
        assert_eq!(config.upstream.timeout_secs, 30);
    }

    #[test]
    fn test_base_url_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_PVF_BASE_URL", "http://127.0.0.1:9999");
        }
        let config = Config::from_env();
        assert_eq!(config.upstream.base_url, "http://127.0.0.1:9999");
        unsafe {
            std::env::remove_var("MCP_PVF_BASE_URL");
        }
    }

    #[test]
    fn test_timeout_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_PVF_TIMEOUT_SECS", "5");
        }
        let config = Config::from_env();
        assert_eq!(config.upstream.timeout_secs, 5);
        unsafe {
            std::env::remove_var("MCP_PVF_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_bad_timeout_falls_back() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_PVF_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert_eq!(config.upstream.timeout_secs, 30);
        unsafe {
            std::env::remove_var("MCP_PVF_TIMEOUT_SECS");
        }
    }
}
