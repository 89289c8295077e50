//! MCP prompts.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::{PromptMessage, PromptMessageRole},
    prompt, prompt_router, schemars,
    schemars::JsonSchema,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::mcp::server::DoorayServer;

pub const DEFAULT_COMMIT_COUNT: u32 = 10;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateIssuesFromCommitsArgs {
    #[schemars(description = "Git author whose commits should be processed")]
    pub author: String,
    // Prompt arguments arrive as strings.
    #[schemars(description = "How many recent commits to inspect (default: 10)")]
    pub commit_count: Option<String>,
}

#[prompt_router(vis = "pub(crate)")]
impl DoorayServer {
    #[prompt(
        name = "update_issues_from_commits",
        description = "Update Dooray issues with details from recent git commits."
    )]
    pub async fn update_issues_from_commits(
        &self,
        params: Parameters<UpdateIssuesFromCommitsArgs>,
    ) -> Result<Vec<PromptMessage>, McpError> {
        let commit_count = parse_commit_count(params.0.commit_count.as_deref())?;
        let text = update_issues_from_commits_text(&params.0.author, commit_count);

        Ok(vec![PromptMessage::new_text(PromptMessageRole::User, text)])
    }
}

fn parse_commit_count(raw: Option<&str>) -> Result<u32, McpError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(DEFAULT_COMMIT_COUNT),
        Some(s) => s.parse::<u32>().map_err(|e| {
            McpError::invalid_params(
                "invalid_commit_count",
                Some(json!({"value": s, "error": e.to_string()})),
            )
        }),
    }
}

pub fn update_issues_from_commits_text(author: &str, commit_count: u32) -> String {
    format!(
        r#"Follow these steps to update Dooray issues from recent git commits:

## 1. Find commits with issue references

Run this command:
```
git log --author="{author}" --oneline -{commit_count}
```

- Only process commits by **{author}**
- Parse `[#PROJECT/NUMBER]` or `[PROJECT/NUMBER]` patterns from commit messages
- Group commits by issue number (several commits may reference the same issue)

## 2. Understand the code changes

For each commit:
- Read the **actual diff**: `git diff HASH^..HASH`
- Read the **source files** that changed to understand the context
- Do NOT just summarize the commit message; analyze the real code changes

## 3. Find the Dooray issue

- Use `find_task_by_number` with the project code and task number
- If that returns the wrong task, use `list_tasks` with a keyword search

## 4. Update the issue body

- Use `update_task` to set the body content
- Write in the team's usual language
- Format in markdown with:
  - A one-line summary of what changed and why
  - A subsection per major change area (file or feature)
  - The **what** and **why**, not just a list of files
  - Actual class names, method names and technical details from the code
  - A final `### Commits` section listing every related commit hash with its message
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_text_includes_author_and_count() {
        let text = update_issues_from_commits_text("jane.doe", 25);

        assert!(text.contains(r#"git log --author="jane.doe" --oneline -25"#));
        assert!(text.contains("Only process commits by **jane.doe**"));
        assert!(text.contains("find_task_by_number"));
        assert!(text.contains("update_task"));
    }

    #[test]
    fn test_parse_commit_count_defaults() {
        assert_eq!(parse_commit_count(None).unwrap(), DEFAULT_COMMIT_COUNT);
        assert_eq!(parse_commit_count(Some("  ")).unwrap(), DEFAULT_COMMIT_COUNT);
        assert_eq!(parse_commit_count(Some("5")).unwrap(), 5);
    }

    #[test]
    fn test_parse_commit_count_rejects_garbage() {
        assert!(parse_commit_count(Some("many")).is_err());
    }
}
