use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;

use crate::{
    app_state::AppState,
    domain::{AuthAPIError, UserProfile},
    utils::auth::get_actor,
};

/// Every registered user, for picking project members and assignees.
#[tracing::instrument(name = "List users route handler", skip_all)]
pub async fn list_users(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<Vec<UserProfile>>, AuthAPIError> {
    get_actor(&jar, &state.banned_token_store).await?;

    let users = state
        .user_store
        .read()
        .await
        .list_users()
        .await
        .map_err(|e| AuthAPIError::UnexpectedError(eyre!(e)))?;

    Ok(Json(users.iter().map(|user| user.profile()).collect()))
}
