//! Process runtime: logging setup and the transport the MCP server runs on.

use std::net::IpAddr;

use axum::Router;
use clap::ValueEnum;
use miette::Diagnostic;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::dooray::DoorayClient;
use crate::mcp::{create_mcp_service, serve_stdio};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// MCP over stdin/stdout
    Stdio,
    /// MCP Streamable HTTP mounted at /mcp
    Http,
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub transport: Transport,
    /// Host address to bind to (HTTP transport only)
    pub host: IpAddr,
    /// Port to listen on (HTTP transport only)
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transport: Transport::Stdio,
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
        }
    }
}

#[derive(Error, Diagnostic, Debug)]
pub enum RuntimeError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(dooray_mcp::runtime::io))]
    Io(#[from] std::io::Error),
}

/// Initialize tracing subscriber with env filter
///
/// Logs go to stderr: stdout belongs to the stdio transport.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dooray_mcp=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Serve the MCP server on the configured transport until shutdown.
pub async fn run(config: Config, client: DoorayClient) -> Result<(), RuntimeError> {
    info!(base_url = client.base_url(), transport = ?config.transport, "starting Dooray MCP server");

    match config.transport {
        Transport::Stdio => serve_stdio(client).await?,
        Transport::Http => serve_http(&config, client).await?,
    }
    Ok(())
}

async fn serve_http(config: &Config, client: DoorayClient) -> Result<(), RuntimeError> {
    let ct = CancellationToken::new();
    let app = Router::new()
        .nest_service("/mcp", create_mcp_service(client, ct.child_token()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("MCP server listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
            ct.cancel();
        })
        .await?;
    Ok(())
}
