use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;

use crate::{
    app_state::AppState,
    domain::AuthAPIError,
    routes::MessageResponse,
    utils::auth::{removal_cookie, session_token, validate_token},
};

/// Revokes the session token so it cannot be replayed, then clears the
/// cookie.
#[tracing::instrument(name = "Logout route handler", skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(StatusCode, CookieJar, Json<MessageResponse>), AuthAPIError> {
    let token = session_token(&jar)?;
    validate_token(&token, &state.banned_token_store).await?;

    state
        .banned_token_store
        .write()
        .await
        .add_token(&token)
        .await
        .map_err(AuthAPIError::UnexpectedError)?;

    Ok((
        StatusCode::OK,
        jar.remove(removal_cookie()),
        Json(MessageResponse::new("Logged out successfully.")),
    ))
}
