//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the MCP
//! server:
//!
//! - **resources**: the `greeting://{name}` resource template
//! - **tools**: the `calculate` tool

pub mod resources;
pub mod tools;
