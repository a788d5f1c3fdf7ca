//! Crate-level error type.
//!
//! Domain failures (a bad calculation, an unknown resource URI) are answered
//! inside the MCP session and never surface here. This type covers what can
//! stop the server process itself.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value is unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A network transport could not open its listener.
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The MCP session failed to start or ended abnormally.
    #[error("MCP session error: {0}")]
    Session(String),

    /// I/O failure of a running listener.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn bind(addr: &str, source: std::io::Error) -> Self {
        Self::Bind {
            addr: addr.to_owned(),
            source,
        }
    }

    pub fn session(err: impl std::fmt::Display) -> Self {
        Self::Session(err.to_string())
    }
}
