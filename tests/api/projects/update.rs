use crate::helpers::{assert_error, get_json_response_body, TestApp};
use serde_json::json;
use test_context::test_context;
use uuid::Uuid;

#[test_context(TestApp)]
#[tokio::test]
async fn should_only_let_creator_or_admin_update(app: &mut TestApp) {
    let (alice, _) = app.register_member("alice").await;
    let (bob, bob_id) = app.register_member("bob").await;
    let (admin, _) = app.admin().await;
    let project_id = alice.add_project("Before", &[bob_id.as_str()]).await;

    assert_error(
        bob.put_project(&project_id, &json!({ "name": "Hijacked" }))
            .await,
        403,
        "Not authorized to update this project",
    )
    .await;

    let response = admin
        .put_project(&project_id, &json!({ "description": "by admin" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let body = get_json_response_body(response).await;
    assert_eq!(body["name"], "Before");
    assert_eq!(body["description"], "by admin");

    let response = alice
        .put_project(&project_id, &json!({ "name": "After", "members": [] }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let body = get_json_response_body(response).await;
    assert_eq!(body["name"], "After");
    assert_eq!(body["members"], json!([]));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_validate_members_on_update(app: &mut TestApp) {
    let (alice, _) = app.register_member("alice").await;
    let project_id = alice.add_project("Team", &[]).await;
    let stranger = Uuid::new_v4();

    assert_error(
        alice
            .put_project(&project_id, &json!({ "members": [stranger] }))
            .await,
        400,
        &format!("Unknown user: {stranger}"),
    )
    .await;

    let body = get_json_response_body(alice.get_project(&project_id).await).await;
    assert_eq!(body["members"], json!([]), "Rejected update must not write");
}
