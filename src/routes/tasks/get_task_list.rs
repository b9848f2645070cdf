use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;

use crate::{
    domain::ProjectAPIError,
    routes::{TaskView, ViewBuilder},
    utils::auth::get_actor,
    AppState,
};

#[tracing::instrument(name = "Get task list route handler", skip_all)]
pub async fn get_task_list(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<Vec<TaskView>>, ProjectAPIError> {
    get_actor(&jar, &state.banned_token_store).await?;

    let tasks = state
        .task_store
        .read()
        .await
        .list_tasks()
        .await
        .map_err(|e| ProjectAPIError::UnexpectedError(eyre!(e)))?;

    let views = ViewBuilder::new(&state).tasks(tasks).await?;

    Ok(Json(views))
}
