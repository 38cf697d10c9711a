//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a JSON resources file, or defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use super::error::{Error, Result};
use crate::domains::resources::{HttpClientConfig, ResourceSetConfig, samples};

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Resources domain configuration.
    pub resources: ResourcesConfig,

    /// HTTP client configuration for public resource fetches.
    pub http: HttpClientConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the resources domain: one descriptor set per provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// Descriptor set for the public HTTP provider.
    pub http_resources: ResourceSetConfig,

    /// Descriptor set for the private function provider.
    pub private_resources: ResourceSetConfig,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            http_resources: samples::http_resources(),
            private_resources: samples::private_resources(),
        }
    }
}

/// On-disk shape of the resources file: either set may be omitted, in
/// which case the built-in samples are used.
#[derive(Debug, Deserialize)]
struct ResourcesFile {
    http_resources: Option<ResourceSetConfig>,
    private_resources: Option<ResourceSetConfig>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "resource-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            resources: ResourcesConfig::default(),
            http: HttpClientConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
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
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_HTTP_TIMEOUT_SECS`, `MCP_RESOURCES_CONFIG`.
    ///
    /// A malformed resources file is a hard error so that a misconfigured
    /// server fails at startup rather than at first use.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timeout) = std::env::var("MCP_HTTP_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) if secs > 0 => config.http.timeout_secs = secs,
                _ => warn!(
                    value = %timeout,
                    "Ignoring invalid MCP_HTTP_TIMEOUT_SECS (expected a positive integer)"
                ),
            }
        }

        if let Ok(path) = std::env::var("MCP_RESOURCES_CONFIG") {
            config.resources = load_resources_file(Path::new(&path))?;
            info!(path = %path, "Resource descriptors loaded from file");
        } else {
            info!("MCP_RESOURCES_CONFIG not set - using built-in sample resources");
        }

        Ok(config)
    }
}

/// Load a resources configuration file.
///
/// The file is a JSON object with optional `http_resources` and
/// `private_resources` set configurations; an omitted set falls back to
/// the built-in samples.
fn load_resources_file(path: &Path) -> Result<ResourcesConfig> {
    if !path.exists() {
        return Err(Error::config(format!(
            "resources file not found: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let file: ResourcesFile = serde_json::from_str(&content).map_err(|e| {
        Error::config(format!(
            "invalid resources file {}: {e}",
            path.display()
        ))
    })?;

    Ok(ResourcesConfig {
        http_resources: file.http_resources.unwrap_or_else(samples::http_resources),
        private_resources: file
            .private_resources
            .unwrap_or_else(samples::private_resources),
    })
}
