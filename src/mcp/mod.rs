//! Model Context Protocol (MCP) server implementation
//!
//! Exposes the Dooray project API as MCP tools over stdio or the Streamable
//! HTTP transport.
//!
//! - **server**: [`DoorayServer`], the `ServerHandler` merging all routers
//! - **tools**: tool parameter types and handlers, grouped by resource
//!   (projects, tasks, comments)
//! - **prompts**: workflow prompt for updating issues from git commits
//! - **service**: transport wiring

mod prompts;
pub mod server;
mod service;
pub mod tools;


pub use prompts::{UpdateIssuesFromCommitsArgs, update_issues_from_commits_text};
pub use server::DoorayServer;
pub use service::{create_mcp_service, serve_stdio};
