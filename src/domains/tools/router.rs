//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! The router is the explicit handler table handed to the server at
//! construction time. Each tool knows how to create its own route.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::CalculateTool;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>() -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new().with_route(CalculateTool::create_route())
}
