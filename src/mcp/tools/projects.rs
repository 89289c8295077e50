//! Project tool implementations
//!
//! Project search plus the read-only project sub-resources (workflows, tags,
//! milestones, members).

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::*, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::dooray::models::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, ProjectQuery, non_empty};
use crate::dooray::segment;
use crate::mcp::server::DoorayServer;
use crate::mcp::tools::{json_result, map_client_error};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchProjectsParams {
    #[schemars(description = "Project code to filter by (e.g. 'APS'). Optional.")]
    pub code: Option<String>,
    #[schemars(description = "Page number, starting at 0 (default: 0)")]
    pub page: Option<u32>,
    #[schemars(description = "Page size (default: 20)")]
    pub size: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ProjectIdParams {
    #[schemars(description = "Dooray project ID")]
    pub project_id: String,
}

#[tool_router(router = project_router, vis = "pub(crate)")]
impl DoorayServer {
    #[tool(
        description = "Search / list Dooray projects. Optionally filter by project code. Use this to turn a project code into the project ID the other tools need."
    )]
    #[instrument(skip_all)]
    pub async fn search_projects(
        &self,
        params: Parameters<SearchProjectsParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = ProjectQuery {
            page: Some(params.0.page.unwrap_or(DEFAULT_PAGE)),
            size: Some(params.0.size.unwrap_or(DEFAULT_PAGE_SIZE)),
            code: non_empty(params.0.code),
        };

        let result = self
            .client()
            .get("/projects", Some(&query))
            .await
            .map_err(map_client_error)?;

        json_result(&result)
    }

    #[tool(description = "Get project details by project ID.")]
    #[instrument(skip_all, fields(project_id = %params.0.project_id))]
    pub async fn get_project(
        &self,
        params: Parameters<ProjectIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.project_resource(&params.0.project_id, "").await
    }

    #[tool(
        description = "Get available workflows (statuses) for a project. Use the returned IDs with set_task_workflow or as list_tasks filters."
    )]
    #[instrument(skip_all, fields(project_id = %params.0.project_id))]
    pub async fn get_workflows(
        &self,
        params: Parameters<ProjectIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.project_resource(&params.0.project_id, "/workflows").await
    }

    #[tool(description = "Get all tags for a project.")]
    #[instrument(skip_all, fields(project_id = %params.0.project_id))]
    pub async fn get_tags(
        &self,
        params: Parameters<ProjectIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.project_resource(&params.0.project_id, "/tags").await
    }

    #[tool(description = "Get all milestones for a project.")]
    #[instrument(skip_all, fields(project_id = %params.0.project_id))]
    pub async fn get_milestones(
        &self,
        params: Parameters<ProjectIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.project_resource(&params.0.project_id, "/milestones").await
    }

    #[tool(description = "Get all members of a project.")]
    #[instrument(skip_all, fields(project_id = %params.0.project_id))]
    pub async fn get_project_members(
        &self,
        params: Parameters<ProjectIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.project_resource(&params.0.project_id, "/members").await
    }
}

impl DoorayServer {
    /// GET `/projects/{id}{suffix}`.
    async fn project_resource(
        &self,
        project_id: &str,
        suffix: &str,
    ) -> Result<CallToolResult, McpError> {
        let path = format!("/projects/{}{suffix}", segment(project_id));
        let result = self
            .client()
            .get::<()>(&path, None)
            .await
            .map_err(map_client_error)?;

        json_result(&result)
    }
}
