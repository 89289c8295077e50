//! Task lookup by project code and display number.
//!
//! Commit messages reference tasks as `[#APS/1689]`, which carries neither the
//! project id nor the post id. Resolving one takes two sequential calls: find
//! the project by code, then search its posts by number.

use serde_json::Value;
use tracing::debug;

use super::api_client::{DoorayClient, segment};
use super::envelope::into_records;
use super::error::{DoorayError, DoorayResult};
use super::models::{PostQuery, ProjectQuery};

/// Outcome of a lookup. A miss is a normal result, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskLookup {
    Found(Value),
    NotFound(String),
}

impl DoorayClient {
    pub async fn find_task_by_number(
        &self,
        project_code: &str,
        task_number: u64,
    ) -> DoorayResult<TaskLookup> {
        let query = ProjectQuery {
            code: Some(project_code.to_string()),
            ..Default::default()
        };
        let projects = into_records(self.get("/projects", Some(&query)).await?);

        let Some(project) = select_project(&projects, project_code) else {
            return Ok(TaskLookup::NotFound(format!(
                "No project found with code '{project_code}'"
            )));
        };
        let project_id = record_id(project).ok_or_else(|| DoorayError::InvalidResponse {
            message: format!("project '{project_code}' has no id"),
        })?;
        debug!(project_code, project_id = %project_id, task_number, "resolved project");

        let query = PostQuery {
            post_number: Some(task_number),
            ..Default::default()
        };
        let path = format!("/projects/{}/posts", segment(&project_id));
        let tasks = into_records(self.get(&path, Some(&query)).await?);

        Ok(match select_task(tasks, task_number) {
            Some(task) => TaskLookup::Found(task),
            None => TaskLookup::NotFound(format!(
                "Task #{task_number} not found in project {project_code}"
            )),
        })
    }
}

/// Pick the project whose code matches case-insensitively, else the first one.
pub(crate) fn select_project<'a>(projects: &'a [Value], code: &str) -> Option<&'a Value> {
    let wanted = code.to_uppercase();
    projects
        .iter()
        .find(|p| {
            p.get("code")
                .and_then(Value::as_str)
                .is_some_and(|c| c.to_uppercase() == wanted)
        })
        .or_else(|| projects.first())
}

/// Pick the post whose `number` matches, else the first one.
pub(crate) fn select_task(tasks: Vec<Value>, number: u64) -> Option<Value> {
    let position = tasks
        .iter()
        .position(|t| t.get("number").is_some_and(|n| number_matches(n, number)));

    tasks.into_iter().nth(position.unwrap_or(0))
}

fn number_matches(value: &Value, number: u64) -> bool {
    match value {
        Value::Number(n) => n.as_u64() == Some(number),
        Value::String(s) => s.trim().parse::<u64>().ok() == Some(number),
        _ => false,
    }
}

fn record_id(record: &Value) -> Option<String> {
    match record.get("id")? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
