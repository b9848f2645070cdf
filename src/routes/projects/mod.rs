use std::collections::BTreeSet;

use color_eyre::eyre::eyre;

use crate::{
    app_state::AppState,
    domain::{
        Project, ProjectAPIError, ProjectId, ProjectStoreError, UserId,
        UserStoreError, ValidationError,
    },
};

mod delete_project;
mod get_project;
mod get_project_list;
mod get_project_members;
mod new_project;
mod update_project;

pub use delete_project::delete_project;
pub use get_project::get_project;
pub use get_project_list::get_project_list;
pub use get_project_members::get_project_members;
pub use new_project::new_project;
pub use update_project::update_project;

#[tracing::instrument(name = "Fetching project", skip_all)]
pub(crate) async fn fetch_project(
    state: &AppState,
    id: &ProjectId,
) -> Result<Project, ProjectAPIError> {
    state
        .project_store
        .read()
        .await
        .get_project(id)
        .await
        .map_err(|e| match e {
            ProjectStoreError::ProjectIDNotFound => {
                ProjectAPIError::IDNotFoundError(*id.as_ref())
            }
            err => ProjectAPIError::UnexpectedError(eyre!(err)),
        })
}

/// Parses member ids and checks that each one names a registered user.
#[tracing::instrument(name = "Resolving project members", skip_all)]
async fn resolve_members(
    state: &AppState,
    ids: &[String],
) -> Result<BTreeSet<UserId>, ProjectAPIError> {
    let members = ids
        .iter()
        .map(|id| UserId::parse(id))
        .collect::<Result<BTreeSet<_>, _>>()?;

    let user_store = state.user_store.read().await;
    for member in &members {
        user_store.get_user(member).await.map_err(|e| match e {
            UserStoreError::UserNotFound => ProjectAPIError::ValidationError(
                ValidationError::new(format!("Unknown user: {member}")),
            ),
            err => ProjectAPIError::UnexpectedError(eyre!(err)),
        })?;
    }

    Ok(members)
}
