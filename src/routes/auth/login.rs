use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;
use secrecy::Secret;
use serde::Deserialize;

use crate::{
    app_state::AppState,
    domain::{AuthAPIError, Email, Password, UserStoreError},
    utils::auth::generate_auth_cookie,
};

use super::AuthResponse;

#[tracing::instrument(name = "Login route handler", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), AuthAPIError> {
    // Malformed credentials cannot match any account.
    let email = Email::parse(&request.email)
        .map_err(|_| AuthAPIError::IncorrectCredentials)?;
    let password = Password::parse(request.password)
        .map_err(|_| AuthAPIError::IncorrectCredentials)?;

    let user = state
        .user_store
        .read()
        .await
        .validate_user(&email, &password)
        .await
        .map_err(|e| match e {
            UserStoreError::InvalidCredentials
            | UserStoreError::UserNotFound => {
                AuthAPIError::IncorrectCredentials
            }
            err => AuthAPIError::UnexpectedError(eyre!(err)),
        })?;

    let auth_cookie =
        generate_auth_cookie(&user).map_err(AuthAPIError::UnexpectedError)?;

    let response = Json(AuthResponse {
        message: "Login successful.".to_owned(),
        user: user.profile(),
    });

    Ok((StatusCode::OK, jar.add(auth_cookie), response))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: Secret<String>,
}
