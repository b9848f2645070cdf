use crate::helpers::{
    assert_error, get_json_response_body, project_schema, TestApp,
};
use serde_json::json;
use test_context::test_context;
use uuid::Uuid;

#[test_context(TestApp)]
#[tokio::test]
async fn should_let_any_user_view_a_project(app: &mut TestApp) {
    let (alice, _) = app.register_member("alice").await;
    let (outsider, _) = app.register_member("outsider").await;
    let project_id = alice.add_project("Open", &[]).await;

    let response = outsider.get_project(&project_id).await;
    assert_eq!(response.status().as_u16(), 200);
    let body = get_json_response_body(response).await;
    assert!(jsonschema::is_valid(&project_schema(), &body));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_or_400_for_bad_project_ids(app: &mut TestApp) {
    let (alice, _) = app.register_member("alice").await;
    let unknown = Uuid::new_v4();

    assert_error(
        alice.get_project(&unknown.to_string()).await,
        404,
        &format!("Resource with ID not found: {unknown}"),
    )
    .await;
    assert_eq!(alice.get_project("nope").await.status().as_u16(), 400);
    assert_eq!(
        alice
            .put_project(&unknown.to_string(), &json!({ "name": "x" }))
            .await
            .status()
            .as_u16(),
        404
    );
    assert_eq!(
        alice
            .delete_project(&unknown.to_string())
            .await
            .status()
            .as_u16(),
        404
    );
}
