use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::CookieJar;

use crate::{
    domain::{authorize_project, ProjectAPIError, ProjectAction, ProjectId},
    routes::{ProjectView, ViewBuilder},
    utils::auth::get_actor,
    AppState,
};

use super::fetch_project;

#[tracing::instrument(name = "Get project route handler", skip_all)]
pub async fn get_project(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(project_id): Path<String>,
) -> Result<Json<ProjectView>, ProjectAPIError> {
    let actor = get_actor(&jar, &state.banned_token_store).await?;
    let project_id = ProjectId::parse(&project_id)?;

    let project = fetch_project(&state, &project_id).await?;
    authorize_project(&actor, &project, ProjectAction::View)?;

    let view = ViewBuilder::new(&state).project(project).await?;

    Ok(Json(view))
}
