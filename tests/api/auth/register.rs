use crate::helpers::{
    assert_error, get_json_response_body, get_random_email, user_schema,
    TestApp, PASSWORD,
};
use serde_json::json;
use taskify::utils::constants::JWT_COOKIE_NAME;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_201_and_session_cookie_on_register(app: &mut TestApp) {
    let session = app.session();
    let email = get_random_email();

    let response = session
        .post_register(&json!({
            "username": "alice",
            "email": email,
            "password": PASSWORD,
            "role": "admin"
        }))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let auth_cookie = response
        .cookies()
        .find(|cookie| cookie.name() == JWT_COOKIE_NAME)
        .expect("No auth cookie found");
    assert!(!auth_cookie.value().is_empty());
    assert!(auth_cookie.http_only());

    let body = get_json_response_body(response).await;
    assert_eq!(body["message"], "User registered successfully.");
    assert!(jsonschema::is_valid(&user_schema(), &body["user"]));
    assert_eq!(body["user"]["email"], email.as_str());
    assert_eq!(
        body["user"]["role"], "member",
        "Role in the register body must be ignored"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_409_if_username_or_email_taken(app: &mut TestApp) {
    let session = app.session();
    let email = get_random_email();
    let response = session
        .post_register(&json!({
            "username": "taken",
            "email": email,
            "password": PASSWORD
        }))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let duplicates = [
        json!({ "username": "taken", "email": get_random_email(), "password": PASSWORD }),
        json!({ "username": "fresh", "email": email, "password": PASSWORD }),
    ];
    for duplicate in duplicates.iter() {
        let response = app.session().post_register(duplicate).await;
        assert_error(response, 409, "User already exists").await;
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_invalid_registration(app: &mut TestApp) {
    let test_cases = [
        (
            json!({ "username": "  ", "email": get_random_email(), "password": PASSWORD }),
            "Username cannot be empty",
        ),
        (
            json!({ "username": "bob", "email": "not-an-email", "password": PASSWORD }),
            "Invalid email address: not-an-email",
        ),
        (
            json!({ "username": "bob", "email": get_random_email(), "password": "123" }),
            "Password too short. Should be 6 to 128 characters.",
        ),
    ];

    for (body, message) in test_cases.iter() {
        let response = app.session().post_register(body).await;
        assert_error(response, 400, message).await;
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_422_if_malformed_input(app: &mut TestApp) {
    let test_cases = [
        json!({ "email": get_random_email(), "password": PASSWORD }),
        json!({ "username": "bob", "password": PASSWORD }),
        json!({ "username": "bob", "email": true, "password": PASSWORD }),
    ];

    for test_case in test_cases.iter() {
        let response = app.session().post_register(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            422,
            "Failed for input: {:?}",
            test_case
        );
    }
}
