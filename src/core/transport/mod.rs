//! Transports carrying MCP messages between clients and the server.
//!
//! rmcp runs the protocol for every transport. This module only chooses
//! where the bytes come from:
//! - **stdio**: stdin/stdout, always available
//! - **tcp**: one session per accepted connection - feature: `tcp`
//! - **http**: MCP streamable HTTP endpoint - feature: `http`

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "tcp")]
mod tcp;

use rmcp::ServiceExt;
use std::fmt;
use tracing::info;

use super::error::{Error, Result};
use super::server::McpServer;

#[cfg(feature = "http")]
use super::config::flag;

#[cfg(feature = "tcp")]
const DEFAULT_TCP_PORT: u16 = 3000;

#[cfg(feature = "http")]
const DEFAULT_HTTP_PORT: u16 = 8080;

/// The transport the server listens on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Transport {
    #[default]
    Stdio,

    #[cfg(feature = "tcp")]
    Tcp { addr: String },

    #[cfg(feature = "http")]
    Http {
        addr: String,
        /// Mount point of the MCP endpoint, always starting with `/`.
        path: String,
        /// Whether to answer browser CORS preflights permissively.
        cors: bool,
    },
}

impl Transport {
    /// Select a transport from `MCP_TRANSPORT` (`stdio` when unset).
    ///
    /// `tcp` reads `MCP_TCP_HOST` / `MCP_TCP_PORT` (127.0.0.1:3000);
    /// `http` reads `MCP_HTTP_HOST` / `MCP_HTTP_PORT` (127.0.0.1:8080),
    /// `MCP_HTTP_PATH` (`/mcp`) and `MCP_HTTP_CORS` (on). Naming a transport
    /// this build was compiled without is a configuration error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let kind = lookup("MCP_TRANSPORT").unwrap_or_else(|| "stdio".to_owned());

        match kind.trim().to_ascii_lowercase().as_str() {
            "stdio" => Ok(Self::Stdio),
            #[cfg(feature = "tcp")]
            "tcp" => Ok(Self::Tcp {
                addr: bind_addr(&lookup, "MCP_TCP", DEFAULT_TCP_PORT)?,
            }),
            #[cfg(feature = "http")]
            "http" => {
                let path = lookup("MCP_HTTP_PATH").unwrap_or_else(|| "/mcp".to_owned());
                if !path.starts_with('/') {
                    return Err(Error::config(format!(
                        "MCP_HTTP_PATH must start with '/', got {path:?}"
                    )));
                }
                Ok(Self::Http {
                    addr: bind_addr(&lookup, "MCP_HTTP", DEFAULT_HTTP_PORT)?,
                    path,
                    cors: flag(&lookup, "MCP_HTTP_CORS", true)?,
                })
            }
            _ => Err(Error::config(format!(
                "unsupported transport {kind:?} (available: {})",
                available().join(", ")
            ))),
        }
    }

    /// Serve `server` until the client (stdio) or the listener (tcp, http)
    /// goes away.
    pub async fn serve(self, server: McpServer) -> Result<()> {
        info!(transport = %self, "Starting transport");

        match self {
            Self::Stdio => {
                let session = server
                    .serve(rmcp::transport::stdio())
                    .await
                    .map_err(Error::session)?;
                let reason = session.waiting().await.map_err(Error::session)?;
                info!(?reason, "stdio session closed");
                Ok(())
            }
            #[cfg(feature = "tcp")]
            Self::Tcp { addr } => tcp::serve(server, &addr).await,
            #[cfg(feature = "http")]
            Self::Http { addr, path, cors } => http::serve(server, &addr, &path, cors).await,
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdio => f.write_str("stdio"),
            #[cfg(feature = "tcp")]
            Self::Tcp { addr } => write!(f, "tcp://{addr}"),
            #[cfg(feature = "http")]
            Self::Http { addr, path, .. } => write!(f, "http://{addr}{path}"),
        }
    }
}

/// Transport names compiled into this build.
fn available() -> Vec<&'static str> {
    [
        Some("stdio"),
        cfg!(feature = "tcp").then_some("tcp"),
        cfg!(feature = "http").then_some("http"),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// `{prefix}_HOST:{prefix}_PORT`, rejecting ports that don't parse.
#[cfg(any(feature = "tcp", feature = "http"))]
fn bind_addr(
    lookup: &impl Fn(&str) -> Option<String>,
    prefix: &str,
    default_port: u16,
) -> Result<String> {
    let host = lookup(&format!("{prefix}_HOST")).unwrap_or_else(|| "127.0.0.1".to_owned());
    let port = match lookup(&format!("{prefix}_PORT")) {
        Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
            Error::config(format!("{prefix}_PORT is not a port number: {raw:?}"))
        })?,
        None => default_port,
    };
    Ok(format!("{host}:{port}"))
}
