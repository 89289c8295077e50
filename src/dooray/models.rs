//! Request payloads and query strings sent to Dooray.
//!
//! Response records stay as opaque `serde_json::Value`s; only outgoing shapes
//! are typed here. Optional fields are skipped when absent so nothing goes out
//! as `null`.

use serde::Serialize;

pub const DEFAULT_MIME_TYPE: &str = "text/x-markdown";
pub const DEFAULT_ORDER: &str = "-createdAt";
pub const DEFAULT_PAGE: u32 = 0;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Drop a string that is absent or blank.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Drop a list that is absent or empty.
pub fn non_empty_list(values: Option<Vec<String>>) -> Option<Vec<String>> {
    values.filter(|v| !v.is_empty())
}

/// Join list filters into the single comma-separated value Dooray expects.
pub fn join_ids(values: Option<Vec<String>>) -> Option<String> {
    non_empty_list(values).map(|ids| ids.join(","))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostBody {
    pub mime_type: String,
    pub content: String,
}

impl PostBody {
    pub fn new(content: impl Into<String>, mime_type: Option<String>) -> Self {
        Self {
            mime_type: non_empty(mime_type).unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
            content: content.into(),
        }
    }
}

/// A due date together with the flag that activates it.
///
/// Dooray ignores `dueDate` unless `dueDateFlag` is true, so the two always
/// travel together.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DueDate {
    due_date_flag: bool,
    due_date: String,
}

impl DueDate {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            due_date_flag: true,
            due_date: date.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub subject: String,
    pub body: PostBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_member_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<String>,
    #[serde(flatten)]
    pub due: Option<DueDate>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<PostBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(flatten)]
    pub due: Option<DueDate>,
}

impl UpdatePostRequest {
    /// True when no field would be sent.
    pub fn is_empty(&self) -> bool {
        self.subject.is_none() && self.body.is_none() && self.priority.is_none() && self.due.is_none()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetWorkflowRequest {
    pub workflow_id: String,
}

#[derive(Debug, Serialize)]
pub struct LogRequest {
    pub body: PostBody,
}

#[derive(Debug, Default, Serialize)]
pub struct ProjectQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_member_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_number: Option<u64>,
}
