//! Dooray client error types.
//!
//! Every failure reaching an MCP caller is one of these variants, so the caller
//! can tell a missing credential apart from a failed HTTP exchange or a request
//! the Dooray service rejected.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum DoorayError {
    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(dooray_mcp::client::configuration),
        help("Set DOORAY_API_TOKEN to a Dooray personal API token.")
    )]
    Configuration { message: String },

    #[error("{}", transport_message(.status, .body))]
    #[diagnostic(code(dooray_mcp::client::transport))]
    Transport { status: Option<u16>, body: String },

    #[error("Dooray API error {code}: {message}")]
    #[diagnostic(code(dooray_mcp::client::remote_api))]
    RemoteApi { code: String, message: String },

    #[error("Invalid response from Dooray: {message}")]
    #[diagnostic(
        code(dooray_mcp::client::invalid_response),
        help("The service returned data in an unexpected shape.")
    )]
    InvalidResponse { message: String },
}

fn transport_message(status: &Option<u16>, body: &str) -> String {
    match status {
        Some(status) => format!("HTTP error ({status}): {body}"),
        None => format!("Request failed: {body}"),
    }
}

impl From<reqwest::Error> for DoorayError {
    fn from(e: reqwest::Error) -> Self {
        DoorayError::Transport {
            status: e.status().map(|s| s.as_u16()),
            body: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for DoorayError {
    fn from(e: serde_json::Error) -> Self {
        DoorayError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type DoorayResult<T> = Result<T, DoorayError>;
