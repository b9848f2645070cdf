use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;

use crate::{
    domain::{authorize_project, ProjectAPIError, ProjectAction, ProjectId},
    routes::{projects::fetch_project, TaskView, ViewBuilder},
    utils::auth::get_actor,
    AppState,
};

#[tracing::instrument(name = "Get project tasks route handler", skip_all)]
pub async fn get_project_tasks(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(project_id): Path<String>,
) -> Result<Json<Vec<TaskView>>, ProjectAPIError> {
    let actor = get_actor(&jar, &state.banned_token_store).await?;
    let project_id = ProjectId::parse(&project_id)?;

    let project = fetch_project(&state, &project_id).await?;
    authorize_project(&actor, &project, ProjectAction::View)?;

    let tasks = state
        .task_store
        .read()
        .await
        .list_tasks_for_project(&project_id)
        .await
        .map_err(|e| ProjectAPIError::UnexpectedError(eyre!(e)))?;

    let views = ViewBuilder::new(&state).tasks(tasks).await?;

    Ok(Json(views))
}
