//! MCP tool implementations
//!
//! Tools are grouped by Dooray resource. Each group is its own `#[tool_router]`
//! block on [`DoorayServer`](crate::mcp::DoorayServer); the server merges them.

mod comments;
mod projects;
mod tasks;


pub use comments::{AddCommentParams, DeleteCommentParams, UpdateCommentParams};
pub use projects::{ProjectIdParams, SearchProjectsParams};
pub use tasks::{
    CreateTaskParams, FindTaskByNumberParams, ListTasksParams, SetTaskWorkflowParams,
    TaskRefParams, UpdateTaskParams,
};

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde_json::{Value, json};

use crate::dooray::DoorayError;

/// Render a Dooray result as pretty-printed JSON text content.
pub(crate) fn json_result(value: &Value) -> Result<CallToolResult, McpError> {
    let content = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(
            "serialization_error",
            Some(json!({"error": e.to_string()})),
        )
    })?;

    Ok(CallToolResult::success(vec![Content::text(content)]))
}

/// Map a client error to an MCP error, keeping the variant's fields as data.
pub(crate) fn map_client_error(e: DoorayError) -> McpError {
    let message = e.to_string();
    let data = match e {
        DoorayError::Configuration { message } => {
            json!({"kind": "configuration_error", "message": message})
        }
        DoorayError::Transport { status, body } => {
            json!({"kind": "transport_error", "status": status, "body": body})
        }
        DoorayError::RemoteApi { code, message } => {
            json!({"kind": "remote_api_error", "code": code, "message": message})
        }
        DoorayError::InvalidResponse { message } => {
            json!({"kind": "invalid_response", "message": message})
        }
    };

    McpError::internal_error(message, Some(data))
}
