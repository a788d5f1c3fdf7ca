//! HTTP transport.
//!
//! The MCP endpoint is rmcp's streamable HTTP service, mounted on an axum
//! router next to a `/health` check. Sessions, SSE streams and JSON-RPC
//! framing are all handled by rmcp.

use axum::{Json, Router, routing::get};
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::core::{Error, McpServer, Result};

/// Build the axum router serving MCP at `path`.
pub(super) fn router(server: McpServer, path: &str, cors: bool) -> Router {
    let name = server.config().server.name.clone();

    let mcp = StreamableHttpService::new(
        move || Ok::<_, std::io::Error>(server.clone()),
        Arc::new(LocalSessionManager::default()),
        StreamableHttpServerConfig::default(),
    );

    let router = Router::new()
        .route("/health", get(move || health(name.clone())))
        .route_service(path, mcp);

    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Bind `addr` and serve until the listener fails.
pub(super) async fn serve(server: McpServer, addr: &str, path: &str, cors: bool) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::bind(addr, e))?;

    info!("Ready - MCP endpoint at http://{}{}", listener.local_addr()?, path);

    axum::serve(listener, router(server, path, cors)).await?;
    Ok(())
}

async fn health(server: String) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "server": server,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
