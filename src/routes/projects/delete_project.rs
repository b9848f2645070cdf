use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;

use crate::{
    domain::{
        authorize_project, ProjectAPIError, ProjectAction, ProjectId,
        ProjectStoreError,
    },
    routes::MessageResponse,
    utils::auth::get_actor,
    AppState,
};

use super::fetch_project;

/// Deletes the project, then its tasks. The task store stays locked
/// throughout so no task can be added to the project mid-cascade.
#[tracing::instrument(name = "Delete project route handler", skip_all)]
pub async fn delete_project(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(project_id): Path<String>,
) -> Result<Json<MessageResponse>, ProjectAPIError> {
    let actor = get_actor(&jar, &state.banned_token_store).await?;
    let project_id = ProjectId::parse(&project_id)?;

    let project = fetch_project(&state, &project_id).await?;
    authorize_project(&actor, &project, ProjectAction::Delete)?;

    let mut task_store = state.task_store.write().await;

    state
        .project_store
        .write()
        .await
        .delete_project(&project_id)
        .await
        .map_err(|e| match e {
            ProjectStoreError::ProjectIDNotFound => {
                ProjectAPIError::IDNotFoundError(*project_id.as_ref())
            }
            err => ProjectAPIError::UnexpectedError(eyre!(err)),
        })?;

    task_store
        .delete_tasks_for_project(&project_id)
        .await
        .map_err(|e| ProjectAPIError::UnexpectedError(eyre!(e)))?;

    Ok(Json(MessageResponse::new("Project deleted successfully")))
}
