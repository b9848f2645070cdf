use crate::helpers::{
    assert_error, get_json_response_body, get_random_email, TestApp, PASSWORD,
};
use reqwest::header::COOKIE;
use serde_json::json;
use taskify::utils::constants::JWT_COOKIE_NAME;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_reject_token_after_logout(app: &mut TestApp) {
    let session = app.session();
    let email = get_random_email();
    let response = session
        .post_register(&json!({
            "username": "frank",
            "email": email,
            "password": PASSWORD
        }))
        .await;
    let token = response
        .cookies()
        .find(|cookie| cookie.name() == JWT_COOKIE_NAME)
        .expect("No auth cookie found")
        .value()
        .to_owned();

    let response = session.post_logout().await;
    assert_eq!(response.status().as_u16(), 200);
    let removed = response
        .cookies()
        .find(|cookie| cookie.name() == JWT_COOKIE_NAME)
        .expect("Logout should overwrite the auth cookie");
    assert!(removed.value().is_empty());
    assert_eq!(
        get_json_response_body(response).await,
        json!({ "message": "Logged out successfully." })
    );

    assert_error(session.get_me().await, 401, "Not authenticated").await;

    // Replaying the old token must fail even though it has not expired.
    let response = reqwest::Client::new()
        .get(format!("{}/api/auth/me", app.address))
        .header(COOKIE, format!("{JWT_COOKIE_NAME}={token}"))
        .send()
        .await
        .unwrap();
    assert_error(response, 401, "Invalid token").await;
}
