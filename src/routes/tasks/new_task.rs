use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;
use serde::Deserialize;

use crate::{
    domain::{
        parse_due_date, validate_assignment, NewTask, ProjectAPIError,
        ProjectId, Task, TaskTitle, UserId,
    },
    routes::{projects::fetch_project, TaskView, ViewBuilder},
    utils::auth::get_actor,
    AppState,
};

use super::non_blank;

#[tracing::instrument(name = "Create new task route handler", skip_all)]
pub async fn new_task(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<NewTaskRequest>,
) -> Result<(StatusCode, Json<TaskView>), ProjectAPIError> {
    let actor = get_actor(&jar, &state.banned_token_store).await?;

    let project_id = ProjectId::parse(&request.project)?;
    let new_task = NewTask {
        title: TaskTitle::parse(&request.title)?,
        description: request.description,
        status: match request.status.as_deref() {
            Some(status) => status.parse()?,
            None => Default::default(),
        },
        priority: match request.priority.as_deref() {
            Some(priority) => priority.parse()?,
            None => Default::default(),
        },
        project: project_id,
        assigned_to: non_blank(request.assigned_to)
            .map(|id| UserId::parse(&id))
            .transpose()?,
        due_date: non_blank(request.due_date)
            .map(|date| parse_due_date(&date))
            .transpose()?,
    };

    let project = fetch_project(&state, &project_id).await?;
    if let Some(assignee) = &new_task.assigned_to {
        validate_assignment(&project, assignee)?;
    }

    let task = Task::new(new_task, actor.id);

    // Recheck under the task store lock, which project deletes also hold.
    let mut task_store = state.task_store.write().await;
    fetch_project(&state, &project_id).await?;
    task_store
        .add_task(task.clone())
        .await
        .map_err(|e| ProjectAPIError::UnexpectedError(eyre!(e)))?;
    drop(task_store);

    let view = ViewBuilder::new(&state).task(task).await?;

    Ok((StatusCode::CREATED, Json(view)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub project: String,
    pub assigned_to: Option<String>,
    pub due_date: Option<String>,
}
