use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::dooray::lookup::{select_project, select_task};
use crate::dooray::{DoorayError, TaskLookup};
use crate::test_support::{MockDooray, success};

/// Mock answering the project search with `projects` and every post search with `tasks`.
async fn mock_with(projects: Value, tasks: Value) -> MockDooray {
    MockDooray::start(move |req| {
        if req.path == "/project/v1/projects" {
            success(projects.clone())
        } else if req.path.ends_with("/posts") {
            success(tasks.clone())
        } else {
            (StatusCode::NOT_FOUND, json!({}))
        }
    })
    .await
}

#[tokio::test]
async fn test_finds_task_by_code_and_number() {
    let mock = mock_with(
        json!([{"code": "APS", "id": "p1"}]),
        json!([{"number": 1689, "id": "t1"}]),
    )
    .await;

    let found = mock.client().find_task_by_number("APS", 1689).await.unwrap();

    assert_eq!(found, TaskLookup::Found(json!({"number": 1689, "id": "t1"})));

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].query_param("code"), Some("APS"));
    assert!(!requests[0].has_query_param("page"));
    assert_eq!(requests[1].path, "/project/v1/projects/p1/posts");
    assert_eq!(requests[1].query_param("postNumber"), Some("1689"));
}

#[tokio::test]
async fn test_unknown_project_is_soft_not_found() {
    let mock = mock_with(json!([]), json!([])).await;

    let found = mock.client().find_task_by_number("ZZZ", 1).await.unwrap();

    assert_eq!(
        found,
        TaskLookup::NotFound("No project found with code 'ZZZ'".to_string())
    );
    assert_eq!(mock.requests().len(), 1, "no post search without a project");
}

#[tokio::test]
async fn test_null_project_result_is_soft_not_found() {
    let mock = mock_with(json!(null), json!([])).await;

    let found = mock.client().find_task_by_number("ZZZ", 1).await.unwrap();

    assert!(matches!(found, TaskLookup::NotFound(_)));
}

#[tokio::test]
async fn test_single_project_object_is_accepted() {
    let mock = mock_with(
        json!({"code": "aps", "id": "p9"}),
        json!([{"number": 3, "id": "t3"}]),
    )
    .await;

    let found = mock.client().find_task_by_number("APS", 3).await.unwrap();

    assert_eq!(found, TaskLookup::Found(json!({"number": 3, "id": "t3"})));
    assert_eq!(mock.requests()[1].path, "/project/v1/projects/p9/posts");
}

#[tokio::test]
async fn test_empty_task_result_is_soft_not_found() {
    let mock = mock_with(json!([{"code": "APS", "id": "p1"}]), json!([])).await;

    let found = mock.client().find_task_by_number("APS", 42).await.unwrap();

    assert_eq!(
        found,
        TaskLookup::NotFound("Task #42 not found in project APS".to_string())
    );
}

#[tokio::test]
async fn test_project_without_id_is_invalid_response() {
    let mock = mock_with(json!([{"code": "APS"}]), json!([])).await;

    let err = mock.client().find_task_by_number("APS", 1).await.unwrap_err();

    assert!(matches!(err, DoorayError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_post_search_failure_propagates() {
    let mock = MockDooray::start(|req| {
        if req.path == "/project/v1/projects" {
            success(json!([{"code": "APS", "id": "p1"}]))
        } else {
            (StatusCode::INTERNAL_SERVER_ERROR, json!({"message": "down"}))
        }
    })
    .await;

    let err = mock.client().find_task_by_number("APS", 1).await.unwrap_err();

    assert!(matches!(err, DoorayError::Transport { status: Some(500), .. }));
}

#[test]
fn test_select_project_prefers_case_insensitive_match() {
    let projects = vec![
        json!({"code": "OTHER", "id": "p0"}),
        json!({"code": "aps", "id": "p1"}),
    ];

    let project = select_project(&projects, "APS").unwrap();

    assert_eq!(project["id"], json!("p1"));
}

#[test]
fn test_select_project_falls_back_to_first() {
    let projects = vec![json!({"code": "APX", "id": "p0"}), json!({"id": "p1"})];

    let project = select_project(&projects, "APS").unwrap();

    assert_eq!(project["id"], json!("p0"));
}

#[test]
fn test_select_task_prefers_exact_number() {
    let tasks = vec![
        json!({"number": 16890, "id": "t0"}),
        json!({"number": 1689, "id": "t1"}),
    ];

    assert_eq!(select_task(tasks, 1689).unwrap()["id"], json!("t1"));
}

#[test]
fn test_select_task_accepts_numeric_string() {
    let tasks = vec![json!({"number": "77", "id": "t7"})];

    assert_eq!(select_task(tasks, 77).unwrap()["id"], json!("t7"));
}

#[test]
fn test_select_task_falls_back_to_first() {
    let tasks = vec![json!({"number": 5, "id": "t5"}), json!({"number": 6, "id": "t6"})];

    assert_eq!(select_task(tasks, 99).unwrap()["id"], json!("t5"));
    assert_eq!(select_task(vec![], 99), None);
}
