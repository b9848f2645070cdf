use crate::helpers::{assert_error, get_json_response_body, TestApp};
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_only_let_creator_or_admin_delete_task(app: &mut TestApp) {
    let (alice, _) = app.register_member("alice").await;
    let (bob, bob_id) = app.register_member("bob").await;
    let (admin, _) = app.admin().await;
    let project_id = alice.add_project("Website", &[bob_id.as_str()]).await;
    let by_bob = bob.add_task(&project_id, "Bob's", Some(&bob_id)).await;
    let by_alice = alice.add_task(&project_id, "Alice's", None).await;

    // Owning the project is not enough to delete someone else's task.
    assert_error(
        alice.delete_task(&by_bob).await,
        403,
        "Not authorized to delete this task",
    )
    .await;

    let response = bob.delete_task(&by_bob).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        get_json_response_body(response).await,
        json!({ "message": "Task deleted successfully" })
    );
    assert_eq!(bob.get_task(&by_bob).await.status().as_u16(), 404);

    assert_eq!(admin.delete_task(&by_alice).await.status().as_u16(), 200);
}
