use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::CookieJar;

use crate::{
    domain::{authorize_task, ProjectAPIError, TaskAction, TaskId},
    routes::{TaskView, ViewBuilder},
    utils::auth::get_actor,
    AppState,
};

use super::fetch_task;

#[tracing::instrument(name = "Get task route handler", skip_all)]
pub async fn get_task(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(task_id): Path<String>,
) -> Result<Json<TaskView>, ProjectAPIError> {
    let actor = get_actor(&jar, &state.banned_token_store).await?;
    let task_id = TaskId::parse(&task_id)?;

    let task = fetch_task(&state, &task_id).await?;
    authorize_task(&actor, &task, TaskAction::View)?;

    let view = ViewBuilder::new(&state).task(task).await?;

    Ok(Json(view))
}
