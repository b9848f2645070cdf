use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;
use secrecy::Secret;
use serde::Deserialize;

use crate::{
    app_state::AppState,
    domain::{
        AuthAPIError, Email, Password, Role, User, UserPasswordHash,
        UserStoreError, Username,
    },
    utils::auth::generate_auth_cookie,
};

use super::AuthResponse;

/// Creates a member account and logs it in. Any `role` in the body is
/// ignored; administrators only come from the startup seed.
#[tracing::instrument(name = "Register route handler", skip_all)]
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), AuthAPIError> {
    let username = Username::parse(&request.username)?;
    let email = Email::parse(&request.email)?;
    let password = Password::parse(request.password)?;

    let hash = UserPasswordHash::from_password(&password)
        .await
        .map_err(AuthAPIError::UnexpectedError)?;
    let user = User::new(username, email, hash, Role::Member);

    state
        .user_store
        .write()
        .await
        .add_user(user.clone())
        .await
        .map_err(|e| match e {
            UserStoreError::UserAlreadyExists => {
                AuthAPIError::UserAlreadyExists
            }
            err => AuthAPIError::UnexpectedError(eyre!(err)),
        })?;

    let auth_cookie =
        generate_auth_cookie(&user).map_err(AuthAPIError::UnexpectedError)?;

    let response = Json(AuthResponse {
        message: "User registered successfully.".to_owned(),
        user: user.profile(),
    });

    Ok((StatusCode::CREATED, jar.add(auth_cookie), response))
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: Secret<String>,
}
