//! Dooray MCP server binary.
//!
//! Resolves the Dooray config from the environment, builds the client once and
//! hands it to the chosen MCP transport.

use std::net::IpAddr;

use clap::Parser;
use dooray_mcp::dooray::{Config, DoorayClient, DoorayError};
use dooray_mcp::runtime::{self, RuntimeError, Transport};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Dooray client error: {0}")]
    #[diagnostic(code(dooray_mcp::binary::client))]
    Client(#[from] DoorayError),

    #[error("MCP server error: {0}")]
    #[diagnostic(code(dooray_mcp::binary::runtime))]
    Runtime(#[from] RuntimeError),
}

#[derive(Parser)]
#[command(name = "dooray-mcp")]
#[command(author, version, about = "Dooray MCP server", long_about = None)]
struct Cli {
    /// MCP transport to serve on
    #[arg(long, value_enum, default_value = "stdio")]
    transport: Transport,

    /// Host address to bind to (http transport)
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on (http transport)
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Override the Dooray API URL (default: DOORAY_API_URL env or https://api.dooray.com)
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    run().await?;
    Ok(())
}

async fn run() -> Result<(), BinaryError> {
    let cli = Cli::parse();
    runtime::init_tracing();

    let _ = rustls::crypto::ring::default_provider().install_default();

    let config = Config::from_env(cli.api_url)?;
    let client = DoorayClient::new(config)?;

    runtime::run(
        runtime::Config {
            transport: cli.transport,
            host: cli.host,
            port: cli.port,
        },
        client,
    )
    .await?;

    Ok(())
}
