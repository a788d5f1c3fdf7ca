//! Server configuration, read from `MCP_*` environment variables.
//!
//! A `.env` file in the working directory is loaded first when present.
//! Every variable is optional; a value that is set but unusable is an error
//! rather than a silent fallback.

use tracing::debug;

use super::error::{Error, Result};
use super::transport::Transport;

/// Default name reported to clients.
pub const DEFAULT_SERVER_NAME: &str = "My MCP Server";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub transport: Transport,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Name reported to clients in `initialize`.
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level filter (`trace` .. `error`), combined with `RUST_LOG`.
    pub level: String,
    pub with_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: DEFAULT_SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: Transport::default(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// Reads `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_LOG_TIMESTAMPS` and the
    /// transport variables described on [`Transport::from_lookup`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(name) = lookup("MCP_SERVER_NAME") {
            config.server.name = name;
        }
        if let Some(level) = lookup("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }
        config.logging.with_timestamps = flag(&lookup, "MCP_LOG_TIMESTAMPS", true)?;
        config.transport = Transport::from_lookup(&lookup)?;

        config.validate()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Check the configuration for values the server cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.server.name.trim().is_empty() {
            return Err(Error::config("server name must not be empty"));
        }
        Ok(())
    }
}

/// Read a boolean variable, `default` when unset.
pub(crate) fn flag(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: bool,
) -> Result<bool> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::config(format!("{key} must be a boolean, got {raw:?}"))),
    }
}

#[cfg(test)]
pub(crate) fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
    let vars: std::collections::HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}
