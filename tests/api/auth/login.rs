use crate::helpers::{
    assert_error, get_json_response_body, get_random_email, user_schema,
    TestApp, PASSWORD,
};
use serde_json::json;
use taskify::utils::constants::JWT_COOKIE_NAME;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_login_with_valid_credentials(app: &mut TestApp) {
    let email = get_random_email();
    let response = app
        .session()
        .post_register(&json!({
            "username": "carol",
            "email": email,
            "password": PASSWORD
        }))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let session = app.session();
    let response = session
        .post_login(&json!({ "email": email, "password": PASSWORD }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    assert!(response
        .cookies()
        .any(|cookie| cookie.name() == JWT_COOKIE_NAME));

    let body = get_json_response_body(response).await;
    assert_eq!(body["message"], "Login successful.");
    assert!(jsonschema::is_valid(&user_schema(), &body["user"]));

    assert_eq!(session.get_me().await.status().as_u16(), 200);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_401_if_incorrect_credentials(app: &mut TestApp) {
    let email = get_random_email();
    app.session()
        .post_register(&json!({
            "username": "dave",
            "email": email,
            "password": PASSWORD
        }))
        .await;

    let test_cases = [
        json!({ "email": email, "password": "wrong-password" }),
        json!({ "email": get_random_email(), "password": PASSWORD }),
        json!({ "email": "garbage", "password": PASSWORD }),
    ];
    for test_case in test_cases.iter() {
        let response = app.session().post_login(test_case).await;
        assert_error(response, 401, "Invalid credentials").await;
    }
}
