//! Greeting & calculator MCP server library.
//!
//! A Model Context Protocol (MCP) server exposing two handlers:
//!
//! - the resource template `greeting://{name}`, answering `Hello, {name}!`
//! - the tool `calculate`, applying add/subtract/multiply/divide to two numbers
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: the handlers themselves
//!   - **tools**: MCP tools that can be executed by clients
//!   - **resources**: resource templates that can be read by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use greeting_calculator_mcp::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config.clone());
//!     config.transport.serve(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
pub use domains::resources::GreetingResource;
pub use domains::tools::definitions::{CalculateTool, calculate};
