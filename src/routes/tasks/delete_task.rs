use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;

use crate::{
    domain::{
        authorize_task, ProjectAPIError, TaskAction, TaskId, TaskStoreError,
    },
    routes::MessageResponse,
    utils::auth::get_actor,
    AppState,
};

use super::fetch_task;

#[tracing::instrument(name = "Delete task route handler", skip_all)]
pub async fn delete_task(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(task_id): Path<String>,
) -> Result<Json<MessageResponse>, ProjectAPIError> {
    let actor = get_actor(&jar, &state.banned_token_store).await?;
    let task_id = TaskId::parse(&task_id)?;

    let task = fetch_task(&state, &task_id).await?;
    authorize_task(&actor, &task, TaskAction::Delete)?;

    state
        .task_store
        .write()
        .await
        .delete_task(&task_id)
        .await
        .map_err(|e| match e {
            TaskStoreError::TaskIDNotFound => {
                ProjectAPIError::IDNotFoundError(*task_id.as_ref())
            }
            err => ProjectAPIError::UnexpectedError(eyre!(err)),
        })?;

    Ok(Json(MessageResponse::new("Task deleted successfully")))
}
