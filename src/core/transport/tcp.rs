//! TCP transport: newline-delimited JSON-RPC, one rmcp session per
//! accepted connection.

use rmcp::ServiceExt;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use crate::core::{Error, McpServer, Result};

/// Accept connections on `addr` until the listener fails to bind.
pub(super) async fn serve(server: McpServer, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::bind(addr, e))?;

    info!("Ready - listening on tcp://{}", listener.local_addr()?);

    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!("Failed to accept connection: {}", e);
                tokio::time::sleep(Duration::from_millis(100)).await;
                continue;
            }
        };

        if let Err(e) = stream.set_nodelay(true) {
            warn!(%peer, "Failed to set TCP_NODELAY: {}", e);
        }
        tokio::spawn(session(server.clone(), stream, peer));
    }
}

async fn session(server: McpServer, stream: TcpStream, peer: SocketAddr) {
    info!(%peer, "Client connected");

    match server.serve(stream).await {
        Ok(running) => match running.waiting().await {
            Ok(reason) => info!(%peer, ?reason, "Client disconnected"),
            Err(e) => warn!(%peer, "Session task failed: {}", e),
        },
        Err(e) => warn!(%peer, "MCP handshake failed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    fn free_port() -> u16 {
        std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port()
    }

    #[tokio::test]
    async fn test_bind_failure_is_reported() {
        let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = occupied.local_addr().unwrap().to_string();

        let err = serve(McpServer::new(Config::default()), &addr)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Bind { .. }));
    }

    #[tokio::test]
    async fn test_client_session_over_tcp() {
        let addr = format!("127.0.0.1:{}", free_port());
        let bind = addr.clone();
        let listener =
            tokio::spawn(async move { serve(McpServer::new(Config::default()), &bind).await });

        let mut stream = None;
        for _ in 0..50 {
            if let Ok(s) = TcpStream::connect(&addr).await {
                stream = Some(s);
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        let client = ().serve(stream.expect("server never started listening")).await.unwrap();

        let tools = client.list_all_tools().await.unwrap();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "calculate");

        client.cancel().await.unwrap();
        listener.abort();
    }
}
