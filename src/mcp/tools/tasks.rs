//! MCP tools for Task (Dooray post) management.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::*, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, instrument};

use crate::dooray::{TaskLookup, segment};
use crate::dooray::models::{
    CreatePostRequest, DEFAULT_ORDER, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DueDate, PostBody,
    PostQuery, SetWorkflowRequest, UpdatePostRequest, join_ids, non_empty, non_empty_list,
};
use crate::mcp::server::DoorayServer;
use crate::mcp::tools::{json_result, map_client_error};

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListTasksParams {
    #[schemars(description = "Project ID to list tasks from")]
    pub project_id: String,
    #[schemars(description = "Page number, starting at 0 (default: 0)")]
    pub page: Option<u32>,
    #[schemars(description = "Page size (default: 20)")]
    pub size: Option<u32>,
    #[schemars(description = "Filter by workflow IDs (see get_workflows)")]
    pub workflow_ids: Option<Vec<String>>,
    #[schemars(description = "Filter by tag IDs (see get_tags)")]
    pub tag_ids: Option<Vec<String>>,
    #[schemars(description = "Filter by milestone IDs (see get_milestones)")]
    pub milestone_ids: Option<Vec<String>>,
    #[schemars(description = "Filter by assignee member IDs (see get_project_members)")]
    pub to_member_ids: Option<Vec<String>>,
    #[schemars(description = "Keyword to search for in task subjects and bodies")]
    pub keyword: Option<String>,
    #[schemars(description = "Sort order, e.g. '-createdAt' (default) or 'postNumber'")]
    pub order: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TaskRefParams {
    #[schemars(description = "Project ID")]
    pub project_id: String,
    #[schemars(description = "Task (post) ID")]
    pub task_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    #[schemars(description = "The project to create the task in")]
    pub project_id: String,
    #[schemars(description = "Task title / subject line")]
    pub subject: String,
    #[schemars(description = "Task description (markdown by default). Optional.")]
    pub body_content: Option<String>,
    #[schemars(description = "MIME type of the body: 'text/x-markdown' (default) or 'text/html'")]
    pub body_mime_type: Option<String>,
    #[schemars(description = "Priority: 'none', 'low', 'normal', 'high' or 'urgent'. Optional.")]
    pub priority: Option<String>,
    #[schemars(description = "Member IDs to assign. Optional.")]
    pub to_member_ids: Option<Vec<String>>,
    #[schemars(description = "Tag IDs to attach. Optional.")]
    pub tag_ids: Option<Vec<String>>,
    #[schemars(description = "Milestone ID to associate. Optional.")]
    pub milestone_id: Option<String>,
    #[schemars(description = "Due date in ISO-8601 format (e.g. '2025-12-31T23:59:59+09:00'). Optional.")]
    pub due_date: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    #[schemars(description = "Project ID")]
    pub project_id: String,
    #[schemars(description = "Task (post) ID to update")]
    pub task_id: String,
    #[schemars(description = "New subject (optional)")]
    pub subject: Option<String>,
    #[schemars(description = "New body content (optional). Replaces the whole body.")]
    pub body_content: Option<String>,
    #[schemars(description = "MIME type of body_content: 'text/x-markdown' (default) or 'text/html'")]
    pub body_mime_type: Option<String>,
    #[schemars(description = "New priority (optional)")]
    pub priority: Option<String>,
    #[schemars(description = "New due date in ISO-8601 format (optional)")]
    pub due_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SetTaskWorkflowParams {
    #[schemars(description = "Project ID")]
    pub project_id: String,
    #[schemars(description = "Task (post) ID")]
    pub task_id: String,
    #[schemars(description = "Workflow ID to move the task to (see get_workflows)")]
    pub workflow_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct FindTaskByNumberParams {
    #[schemars(description = "The project code (e.g. 'APS')")]
    pub project_code: String,
    #[schemars(description = "The task display number (e.g. 1689)")]
    pub task_number: u64,
}

// =============================================================================
// Task Tools
// =============================================================================

#[tool_router(router = task_router, vis = "pub(crate)")]
impl DoorayServer {
    #[tool(
        description = "List tasks (posts) in a project with optional filters. List filters take IDs from get_workflows, get_tags, get_milestones and get_project_members."
    )]
    #[instrument(skip_all, fields(project_id = %params.0.project_id))]
    pub async fn list_tasks(
        &self,
        params: Parameters<ListTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let query = PostQuery {
            page: Some(p.page.unwrap_or(DEFAULT_PAGE)),
            size: Some(p.size.unwrap_or(DEFAULT_PAGE_SIZE)),
            order: Some(non_empty(p.order).unwrap_or_else(|| DEFAULT_ORDER.to_string())),
            workflow_ids: join_ids(p.workflow_ids),
            tag_ids: join_ids(p.tag_ids),
            milestone_ids: join_ids(p.milestone_ids),
            to_member_ids: join_ids(p.to_member_ids),
            keyword: non_empty(p.keyword),
            post_number: None,
        };

        let path = format!("/projects/{}/posts", segment(&p.project_id));
        let result = self
            .client()
            .get(&path, Some(&query))
            .await
            .map_err(map_client_error)?;

        json_result(&result)
    }

    #[tool(description = "Get a single task's full details.")]
    #[instrument(skip_all, fields(project_id = %params.0.project_id, task_id = %params.0.task_id))]
    pub async fn get_task(
        &self,
        params: Parameters<TaskRefParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = format!(
            "/projects/{}/posts/{}",
            segment(&params.0.project_id),
            segment(&params.0.task_id)
        );
        let result = self
            .client()
            .get::<()>(&path, None)
            .await
            .map_err(map_client_error)?;

        json_result(&result)
    }

    #[tool(
        description = "Create a new task (post) in a project. Only subject is required; the body defaults to empty markdown."
    )]
    #[instrument(skip_all, fields(project_id = %params.0.project_id))]
    pub async fn create_task(
        &self,
        params: Parameters<CreateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let request = CreatePostRequest {
            subject: p.subject,
            body: PostBody::new(p.body_content.unwrap_or_default(), p.body_mime_type),
            priority: non_empty(p.priority),
            to_member_ids: non_empty_list(p.to_member_ids),
            tag_ids: non_empty_list(p.tag_ids),
            milestone_id: non_empty(p.milestone_id),
            due: non_empty(p.due_date).map(DueDate::new),
        };

        let path = format!("/projects/{}/posts", segment(&p.project_id));
        let result = self
            .client()
            .post(&path, &request)
            .await
            .map_err(map_client_error)?;

        json_result(&result)
    }

    #[tool(
        description = "Update an existing task's fields. Only supplied fields are changed; with nothing supplied no request is made."
    )]
    #[instrument(skip_all, fields(project_id = %params.0.project_id, task_id = %params.0.task_id))]
    pub async fn update_task(
        &self,
        params: Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let body_mime_type = p.body_mime_type;
        let request = UpdatePostRequest {
            subject: non_empty(p.subject),
            body: non_empty(p.body_content).map(|content| PostBody::new(content, body_mime_type)),
            priority: non_empty(p.priority),
            due: non_empty(p.due_date).map(DueDate::new),
        };

        if request.is_empty() {
            info!("update_task called without fields; skipping request");
            return json_result(&json!({"message": "No fields to update"}));
        }

        let path = format!(
            "/projects/{}/posts/{}",
            segment(&p.project_id),
            segment(&p.task_id)
        );
        let result = self
            .client()
            .put(&path, Some(&request))
            .await
            .map_err(map_client_error)?;

        json_result(&result)
    }

    #[tool(description = "Change a task's workflow status. Get workflow IDs from get_workflows.")]
    #[instrument(skip_all, fields(project_id = %params.0.project_id, task_id = %params.0.task_id))]
    pub async fn set_task_workflow(
        &self,
        params: Parameters<SetTaskWorkflowParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let request = SetWorkflowRequest {
            workflow_id: p.workflow_id,
        };

        let path = format!(
            "/projects/{}/posts/{}/set-workflow",
            segment(&p.project_id),
            segment(&p.task_id)
        );
        let result = self
            .client()
            .put(&path, Some(&request))
            .await
            .map_err(map_client_error)?;

        json_result(&result)
    }

    #[tool(description = "Mark a task as done.")]
    #[instrument(skip_all, fields(project_id = %params.0.project_id, task_id = %params.0.task_id))]
    pub async fn mark_task_done(
        &self,
        params: Parameters<TaskRefParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = format!(
            "/projects/{}/posts/{}/set-done",
            segment(&params.0.project_id),
            segment(&params.0.task_id)
        );
        let result = self
            .client()
            .put::<()>(&path, None)
            .await
            .map_err(map_client_error)?;

        json_result(&result)
    }

    #[tool(
        description = "Find a task by its display number within a project, e.g. resolve [#APS/1689] from a commit message. Resolves the project by code first, then searches for the task number."
    )]
    #[instrument(skip_all, fields(project_code = %params.0.project_code, task_number = params.0.task_number))]
    pub async fn find_task_by_number(
        &self,
        params: Parameters<FindTaskByNumberParams>,
    ) -> Result<CallToolResult, McpError> {
        let lookup = self
            .client()
            .find_task_by_number(&params.0.project_code, params.0.task_number)
            .await
            .map_err(map_client_error)?;

        match lookup {
            TaskLookup::Found(task) => json_result(&task),
            TaskLookup::NotFound(message) => {
                info!(%message, "task lookup missed");
                json_result(&json!({"error": message}))
            }
        }
    }
}
