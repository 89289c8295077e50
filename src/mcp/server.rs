//! MCP server implementation
//!
//! [`DoorayServer`] owns the Dooray client and the merged tool and prompt
//! routers. It holds no per-call state, so cloning it per session is cheap.

use rmcp::{
    RoleServer, ServerHandler,
    handler::server::router::{prompt::PromptRouter, tool::ToolRouter},
    model::*,
    prompt_handler,
    service::RequestContext,
    tool_handler,
};

use crate::dooray::DoorayClient;

const INSTRUCTIONS: &str = "Dooray MCP Server - read and update Dooray projects, tasks (posts), \
comments (logs), tags, milestones and members. Resolve a project code with search_projects, \
or jump straight to a task reference like [#APS/1689] with find_task_by_number.";

#[derive(Clone)]
pub struct DoorayServer {
    client: DoorayClient,
    tool_router: ToolRouter<Self>,
    prompt_router: PromptRouter<Self>,
}

impl DoorayServer {
    pub fn new(client: DoorayClient) -> Self {
        Self {
            client,
            tool_router: Self::project_router() + Self::task_router() + Self::comment_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    pub fn client(&self) -> &DoorayClient {
        &self.client
    }

    /// Get the tool router for this handler
    pub fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }
}

#[tool_handler(router = self.tool_router)]
#[prompt_handler(router = self.prompt_router)]
impl ServerHandler for DoorayServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder()
            .enable_tools()
            .enable_prompts()
            .build();
        info.instructions = Some(INSTRUCTIONS.to_string());
        info
    }
}
