use crate::helpers::{
    assert_error, get_json_response_body, task_schema, TestApp,
};
use serde_json::json;
use test_context::test_context;
use uuid::Uuid;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_201_with_defaults_for_unassigned_task(app: &mut TestApp) {
    let (alice, alice_id) = app.register_member("alice").await;
    let project_id = alice.add_project("Website", &[]).await;

    let response = alice
        .post_task(&json!({
            "title": "Write copy",
            "project": project_id,
            "assignedTo": "",
            "dueDate": ""
        }))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let body = get_json_response_body(response).await;
    assert!(jsonschema::is_valid(&task_schema(), &body));
    assert_eq!(body["status"], "pending");
    assert_eq!(body["priority"], "medium");
    assert_eq!(body["description"], "");
    assert_eq!(body["assignedTo"], serde_json::Value::Null);
    assert_eq!(body["dueDate"], serde_json::Value::Null);
    assert_eq!(body["createdBy"]["id"], alice_id.as_str());
    assert_eq!(body["project"]["id"], project_id.as_str());
    assert_eq!(body["project"]["name"], "Website");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_create_task_with_every_field(app: &mut TestApp) {
    let (alice, _) = app.register_member("alice").await;
    let (_bob, bob_id) = app.register_member("bob").await;
    let project_id = alice.add_project("Website", &[bob_id.as_str()]).await;

    let response = alice
        .post_task(&json!({
            "title": "Launch",
            "description": "Go live",
            "status": "in-progress",
            "priority": "high",
            "project": project_id,
            "assignedTo": bob_id,
            "dueDate": "2025-12-31"
        }))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let body = get_json_response_body(response).await;
    assert!(jsonschema::is_valid(&task_schema(), &body));
    assert_eq!(body["status"], "in-progress");
    assert_eq!(body["priority"], "high");
    assert_eq!(body["assignedTo"]["id"], bob_id.as_str());
    assert_eq!(body["dueDate"], "2025-12-31");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_assignee_outside_project(app: &mut TestApp) {
    let (alice, _) = app.register_member("alice").await;
    let (_carol, carol_id) = app.register_member("carol").await;
    let project_id = alice.add_project("Private", &[]).await;

    let response = alice
        .post_task(&json!({
            "title": "Sneaky",
            "project": project_id,
            "assignedTo": carol_id
        }))
        .await;
    assert_error(
        response,
        400,
        "candidate is not creator or member of target project",
    )
    .await;

    let body = get_json_response_body(alice.get_tasks().await).await;
    assert_eq!(body, json!([]), "Rejected task must not be stored");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_or_404_if_invalid_task(app: &mut TestApp) {
    let (alice, _) = app.register_member("alice").await;
    let project_id = alice.add_project("Website", &[]).await;
    let unknown = Uuid::new_v4();

    let test_cases = [
        (
            json!({ "title": "  ", "project": project_id }),
            400,
            "Task title cannot be empty".to_owned(),
        ),
        (
            json!({ "title": "x", "project": project_id, "status": "done" }),
            400,
            "Invalid status: done. Expected one of pending, in-progress, completed"
                .to_owned(),
        ),
        (
            json!({ "title": "x", "project": project_id, "dueDate": "someday" }),
            400,
            "Invalid due date: someday".to_owned(),
        ),
        (
            json!({ "title": "x", "project": unknown }),
            404,
            format!("Resource with ID not found: {unknown}"),
        ),
    ];

    for (body, status, message) in test_cases.iter() {
        let response = alice.post_task(body).await;
        assert_error(response, *status, message).await;
    }

    let response = alice.post_task(&json!({ "project": project_id })).await;
    assert_eq!(response.status().as_u16(), 422);
}
