use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;
use serde::Deserialize;

use crate::{
    domain::{
        authorize_project, ProjectAPIError, ProjectAction, ProjectChanges,
        ProjectId, ProjectName, ProjectStoreError,
    },
    routes::{ProjectView, ViewBuilder},
    utils::auth::get_actor,
    AppState,
};

use super::{fetch_project, resolve_members};

#[tracing::instrument(name = "Update project route handler", skip_all)]
pub async fn update_project(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(project_id): Path<String>,
    Json(request): Json<UpdateProjectRequest>,
) -> Result<Json<ProjectView>, ProjectAPIError> {
    let actor = get_actor(&jar, &state.banned_token_store).await?;
    let project_id = ProjectId::parse(&project_id)?;
    let name = request
        .name
        .as_deref()
        .map(ProjectName::parse)
        .transpose()?;

    let mut project = fetch_project(&state, &project_id).await?;
    authorize_project(&actor, &project, ProjectAction::Update)?;

    let members = match &request.members {
        Some(ids) => Some(resolve_members(&state, ids).await?),
        None => None,
    };

    project.apply(ProjectChanges {
        name,
        description: request.description,
        members,
    });

    state
        .project_store
        .write()
        .await
        .update_project(&project)
        .await
        .map_err(|e| match e {
            ProjectStoreError::ProjectIDNotFound => {
                ProjectAPIError::IDNotFoundError(*project_id.as_ref())
            }
            err => ProjectAPIError::UnexpectedError(eyre!(err)),
        })?;

    let view = ViewBuilder::new(&state).project(project).await?;

    Ok(Json(view))
}

#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub members: Option<Vec<String>>,
}
