use crate::helpers::{get_json_response_body, user_schema, TestApp};
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_list_all_users_without_hashes(app: &mut TestApp) {
    let (alice, alice_id) = app.register_member("alice").await;
    let (_bob, bob_id) = app.register_member("bob").await;

    let response = alice.get_users().await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_json_response_body(response).await;
    let users = body.as_array().expect("Expected an array of users");
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(jsonschema::is_valid(&user_schema(), user));
    }
    let ids: Vec<&str> = users.iter().filter_map(|u| u["id"].as_str()).collect();
    assert!(ids.contains(&alice_id.as_str()));
    assert!(ids.contains(&bob_id.as_str()));
}
