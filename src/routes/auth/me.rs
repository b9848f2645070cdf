use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;
use serde::Serialize;

use crate::{
    app_state::AppState,
    domain::{AuthAPIError, Role, UserProfile, UserStoreError},
    utils::auth::get_actor,
};

#[tracing::instrument(name = "Current user route handler", skip_all)]
pub async fn me(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<MeResponse>, AuthAPIError> {
    let actor = get_actor(&jar, &state.banned_token_store).await?;

    let user = state
        .user_store
        .read()
        .await
        .get_user(&actor.id)
        .await
        .map_err(|e| match e {
            UserStoreError::UserNotFound => AuthAPIError::UserNotFound,
            err => AuthAPIError::UnexpectedError(eyre!(err)),
        })?;

    Ok(Json(MeResponse {
        user: CurrentUser {
            is_admin: user.role == Role::Admin,
            profile: user.profile(),
        },
    }))
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: CurrentUser,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub is_admin: bool,
}
