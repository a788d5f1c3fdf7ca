//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, and starts the server with the
//! configured transport.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use greeting_calculator_mcp::core::{Config, McpServer};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    init_logging(&config.logging.level, config.logging.with_timestamps);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = McpServer::new(config.clone());

    info!("Server initialized");

    config.transport.serve(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Log to stderr; stdout belongs to the stdio transport.
///
/// `level` is the floor, `RUST_LOG` directives refine it per target.
fn init_logging(level: &str, with_timestamps: bool) {
    let level: Level = level.parse().unwrap_or(Level::INFO);
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
