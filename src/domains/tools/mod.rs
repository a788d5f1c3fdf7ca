//! Tools domain module.
//!
//! Tools are executable functions that MCP clients call with named
//! arguments.
//!
//! - `definitions/` - one file per tool: parameters, execution, route
//! - `router.rs` - the `ToolRouter` handed to the server at construction
//! - `error.rs` - domain errors reported back as error tool results
//!
//! A new tool gets its own file in `definitions/` and one `with_route()`
//! call in `router.rs`.

pub mod definitions;
mod error;
pub mod router;

pub use error::CalculationError;
pub use router::build_tool_router;
