//! The `ServerHandler` every transport serves.
//!
//! A server owns its handler tables: the tool router from
//! `domains/tools/router.rs` and the resource templates from
//! `domains/resources/registry.rs`, or any tables passed to
//! [`McpServer::with_handlers`]. Nothing is registered through global state.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::config::Config;
use crate::domains::{resources::ResourceService, tools::build_tool_router};

/// Instructions sent to clients during initialization.
pub const INSTRUCTIONS: &str = "Read greeting://{name} for a personalized greeting. \
    Call the calculate tool with an operation (add, subtract, multiply, divide) and two numbers a and b.";

/// Greeting and calculator server.
///
/// Clones share configuration and resource table, so a transport can hand
/// each session its own copy.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,
    resources: Arc<ResourceService>,
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration and the default
    /// handler tables.
    pub fn new(config: Config) -> Self {
        Self::with_handlers(config, build_tool_router::<Self>(), ResourceService::new())
    }

    /// Create a new MCP server from explicit handler tables.
    pub fn with_handlers(
        config: Config,
        tool_router: ToolRouter<Self>,
        resource_service: ResourceService,
    ) -> Self {
        Self {
            config: Arc::new(config),
            resources: Arc::new(resource_service),
            tool_router,
        }
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        debug!("Listing resources");
        Ok(ListResourcesResult {
            resources: Vec::new(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        debug!("Listing resource templates");
        Ok(ListResourceTemplatesResult {
            resource_templates: self.resources.list_resource_templates(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!(uri = %request.uri, "Reading resource");
        self.resources.read_resource(&request.uri).map_err(|e| {
            warn!("{}", e);
            McpError::resource_not_found(e.to_string(), None)
        })
    }
}
