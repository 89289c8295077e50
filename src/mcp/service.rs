//! MCP transports
//!
//! stdio serves a single client over stdin/stdout; streamable HTTP produces a
//! tower service that can be nested into an Axum router.

use rmcp::ServiceExt;
use rmcp::transport::stdio;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::dooray::DoorayClient;

use super::server::DoorayServer;

/// Create MCP Streamable HTTP service
///
/// # Example
/// ```no_run
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// # use dooray_mcp::dooray::{Config, DoorayClient};
/// # use dooray_mcp::mcp::create_mcp_service;
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let client = DoorayClient::new(Config::new("https://api.dooray.com", "token")?)?;
///
/// let ct = CancellationToken::new();
/// let mcp_service = create_mcp_service(client, ct);
///
/// let app: Router = Router::new().nest_service("/mcp", mcp_service);
/// # Ok(())
/// # }
/// ```
pub fn create_mcp_service(
    client: DoorayClient,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<DoorayServer, LocalSessionManager> {
    // Service factory: creates new DoorayServer instance per session
    // Note: Returns io::Error to match rmcp's expected signature
    let service_factory =
        move || -> Result<DoorayServer, std::io::Error> { Ok(DoorayServer::new(client.clone())) };

    let mut config = StreamableHttpServerConfig::default();
    config.stateful_mode = true;
    config.cancellation_token = cancellation_token;

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}

/// Serve over stdin/stdout until the client disconnects.
pub async fn serve_stdio(client: DoorayClient) -> Result<(), std::io::Error> {
    let service = DoorayServer::new(client)
        .serve(stdio())
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    info!("MCP server running on stdio");

    let quit_reason = service
        .waiting()
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    info!(?quit_reason, "MCP server stopped");

    Ok(())
}
