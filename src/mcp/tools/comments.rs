//! Comment tools. Dooray calls task comments "logs".

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::*, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::dooray::models::{LogRequest, PostBody};
use crate::dooray::segment;
use crate::mcp::server::DoorayServer;
use crate::mcp::tools::tasks::TaskRefParams;
use crate::mcp::tools::{json_result, map_client_error};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddCommentParams {
    #[schemars(description = "Project ID")]
    pub project_id: String,
    #[schemars(description = "Task (post) ID to comment on")]
    pub task_id: String,
    #[schemars(description = "Comment text")]
    pub content: String,
    #[schemars(description = "MIME type: 'text/x-markdown' (default) or 'text/html'")]
    pub mime_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateCommentParams {
    #[schemars(description = "Project ID")]
    pub project_id: String,
    #[schemars(description = "Task (post) ID")]
    pub task_id: String,
    #[schemars(description = "Comment (log) ID to update")]
    pub log_id: String,
    #[schemars(description = "New comment text")]
    pub content: String,
    #[schemars(description = "MIME type: 'text/x-markdown' (default) or 'text/html'")]
    pub mime_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteCommentParams {
    #[schemars(description = "Project ID")]
    pub project_id: String,
    #[schemars(description = "Task (post) ID")]
    pub task_id: String,
    #[schemars(description = "Comment (log) ID to delete")]
    pub log_id: String,
}

fn logs_path(project_id: &str, task_id: &str) -> String {
    format!(
        "/projects/{}/posts/{}/logs",
        segment(project_id),
        segment(task_id)
    )
}

#[tool_router(router = comment_router, vis = "pub(crate)")]
impl DoorayServer {
    #[tool(description = "List comments (logs) on a task.")]
    #[instrument(skip_all, fields(project_id = %params.0.project_id, task_id = %params.0.task_id))]
    pub async fn list_comments(
        &self,
        params: Parameters<TaskRefParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = logs_path(&params.0.project_id, &params.0.task_id);
        let result = self
            .client()
            .get::<()>(&path, None)
            .await
            .map_err(map_client_error)?;

        json_result(&result)
    }

    #[tool(description = "Add a comment to a task.")]
    #[instrument(skip_all, fields(project_id = %params.0.project_id, task_id = %params.0.task_id))]
    pub async fn add_comment(
        &self,
        params: Parameters<AddCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let request = LogRequest {
            body: PostBody::new(p.content, p.mime_type),
        };

        let path = logs_path(&p.project_id, &p.task_id);
        let result = self
            .client()
            .post(&path, &request)
            .await
            .map_err(map_client_error)?;

        json_result(&result)
    }

    #[tool(description = "Update an existing comment on a task.")]
    #[instrument(skip_all, fields(project_id = %params.0.project_id, log_id = %params.0.log_id))]
    pub async fn update_comment(
        &self,
        params: Parameters<UpdateCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let request = LogRequest {
            body: PostBody::new(p.content, p.mime_type),
        };

        let path = format!("{}/{}", logs_path(&p.project_id, &p.task_id), segment(&p.log_id));
        let result = self
            .client()
            .put(&path, Some(&request))
            .await
            .map_err(map_client_error)?;

        json_result(&result)
    }

    #[tool(description = "Delete a comment from a task.")]
    #[instrument(skip_all, fields(project_id = %params.0.project_id, log_id = %params.0.log_id))]
    pub async fn delete_comment(
        &self,
        params: Parameters<DeleteCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let path = format!("{}/{}", logs_path(&p.project_id, &p.task_id), segment(&p.log_id));
        let result = self
            .client()
            .delete(&path)
            .await
            .map_err(map_client_error)?;

        json_result(&result)
    }
}
