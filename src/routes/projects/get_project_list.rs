use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;

use crate::{
    domain::{ProjectAPIError, ProjectScope},
    routes::{ProjectView, ViewBuilder},
    utils::auth::get_actor,
    AppState,
};

/// Admins see every project; everyone else sees the projects they created
/// or belong to. Newest first.
#[tracing::instrument(name = "Get project list route handler", skip_all)]
pub async fn get_project_list(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<Vec<ProjectView>>, ProjectAPIError> {
    let actor = get_actor(&jar, &state.banned_token_store).await?;

    let projects = state
        .project_store
        .read()
        .await
        .list_projects(&ProjectScope::for_actor(&actor))
        .await
        .map_err(|e| ProjectAPIError::UnexpectedError(eyre!(e)))?;

    let views = ViewBuilder::new(&state).projects(projects).await?;

    Ok(Json(views))
}
