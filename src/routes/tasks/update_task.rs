use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;
use serde::Deserialize;

use crate::{
    domain::{
        authorize_task, parse_due_date, validate_assignment, ProjectAPIError,
        TaskAction, TaskChanges, TaskId, TaskStoreError, TaskTitle, UserId,
        ValidationError,
    },
    routes::{projects::fetch_project, TaskView, ViewBuilder},
    utils::auth::get_actor,
    AppState,
};

use super::{fetch_task, non_blank};

/// Applies a partial update. Checks run in order: payload validity, task
/// existence, permission, assignee legality. Nothing is written unless all
/// of them pass.
#[tracing::instrument(name = "Update task route handler", skip_all)]
pub async fn update_task(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(task_id): Path<String>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<TaskView>, ProjectAPIError> {
    let actor = get_actor(&jar, &state.banned_token_store).await?;
    let task_id = TaskId::parse(&task_id)?;
    let changes = request.into_changes()?;

    let mut task = fetch_task(&state, &task_id).await?;
    authorize_task(&actor, &task, TaskAction::Update(&changes))?;

    if let Some(assignee) = &changes.assigned_to {
        let project = fetch_project(&state, &task.project).await?;
        validate_assignment(&project, assignee)?;
    }

    task.apply(changes);

    state
        .task_store
        .write()
        .await
        .update_task(&task)
        .await
        .map_err(|e| match e {
            TaskStoreError::TaskIDNotFound => {
                ProjectAPIError::IDNotFoundError(*task_id.as_ref())
            }
            err => ProjectAPIError::UnexpectedError(eyre!(err)),
        })?;

    let view = ViewBuilder::new(&state).task(task).await?;

    Ok(Json(view))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assigned_to: Option<String>,
    pub due_date: Option<String>,
}

impl UpdateTaskRequest {
    fn into_changes(self) -> Result<TaskChanges, ValidationError> {
        Ok(TaskChanges {
            title: self.title.as_deref().map(TaskTitle::parse).transpose()?,
            description: self.description,
            status: self.status.as_deref().map(str::parse).transpose()?,
            priority: self.priority.as_deref().map(str::parse).transpose()?,
            assigned_to: non_blank(self.assigned_to)
                .map(|id| UserId::parse(&id))
                .transpose()?,
            due_date: non_blank(self.due_date)
                .map(|date| parse_due_date(&date))
                .transpose()?,
        })
    }
}
