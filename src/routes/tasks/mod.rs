use color_eyre::eyre::eyre;

use crate::{
    app_state::AppState,
    domain::{ProjectAPIError, Task, TaskId, TaskStoreError},
};

mod delete_task;
mod get_project_tasks;
mod get_task;
mod get_task_list;
mod new_task;
mod update_task;

pub use delete_task::delete_task;
pub use get_project_tasks::get_project_tasks;
pub use get_task::get_task;
pub use get_task_list::get_task_list;
pub use new_task::new_task;
pub use update_task::update_task;

#[tracing::instrument(name = "Fetching task", skip_all)]
pub(crate) async fn fetch_task(
    state: &AppState,
    id: &TaskId,
) -> Result<Task, ProjectAPIError> {
    state
        .task_store
        .read()
        .await
        .get_task(id)
        .await
        .map_err(|e| match e {
            TaskStoreError::TaskIDNotFound => {
                ProjectAPIError::IDNotFoundError(*id.as_ref())
            }
            err => ProjectAPIError::UnexpectedError(eyre!(err)),
        })
}

/// Form clients send `""` for "no value" on optional fields.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
